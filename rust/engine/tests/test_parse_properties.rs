mod common;

use std::collections::HashSet;

use common::*;
use pokerhud_engine::action::action_kind;
use pokerhud_engine::session::parse_session;

const ALL_SESSIONS: [&str; 5] = [
    SINGLE_HAND,
    BROKEN_SESSION,
    ZOOM_SESSION,
    CASH_SESSION,
    RUN_IT_TWICE,
];

#[test]
fn action_order_is_contiguous_and_matches_verb_lines() {
    for session in ALL_SESSIONS {
        let import = parse_session(session);
        let blocks: Vec<_> = session
            .split("\n\n\n")
            .filter(|b| b.contains("Hand #"))
            .collect();
        for hand in &import.hands {
            let orders: Vec<u32> = hand.actions.iter().map(|a| a.order).collect();
            let expected: Vec<u32> = (1..=hand.actions.len() as u32).collect();
            assert_eq!(orders, expected, "hand {}", hand.id);

            let block = blocks
                .iter()
                .find(|b| b.contains(&format!("#{}:", hand.id)))
                .expect("source block");
            let verb_lines = block.lines().filter(|l| action_kind(l).is_some()).count();
            assert_eq!(verb_lines, hand.actions.len(), "hand {}", hand.id);
        }
    }
}

#[test]
fn streets_never_go_backwards() {
    for session in ALL_SESSIONS {
        for hand in parse_session(session).hands {
            assert!(
                hand.actions.windows(2).all(|w| w[0].street <= w[1].street),
                "hand {}",
                hand.id
            );
        }
    }
}

#[test]
fn players_are_unique_within_a_hand() {
    for session in ALL_SESSIONS {
        for hand in parse_session(session).hands {
            let names: HashSet<_> = hand.players.iter().map(|p| &p.username).collect();
            assert_eq!(names.len(), hand.players.len(), "hand {}", hand.id);
        }
    }
}

#[test]
fn board_count_follows_markers() {
    for session in ALL_SESSIONS {
        for hand in parse_session(session).hands {
            assert!(hand.community_cards.len() <= 2);
        }
    }
    let zoom = parse_session(ZOOM_SESSION);
    assert!(zoom.hands.iter().all(|h| h.community_cards.len() == 1));
    assert_eq!(parse_session(RUN_IT_TWICE).hands[0].community_cards.len(), 2);
}

#[test]
fn parsing_is_idempotent() {
    for session in ALL_SESSIONS {
        assert_eq!(parse_session(session), parse_session(session));
    }
}

#[test]
fn free_actions_have_zero_amount() {
    for session in ALL_SESSIONS {
        for hand in parse_session(session).hands {
            for action in hand.actions.iter().filter(|a| a.kind.is_free()) {
                assert_eq!(action.amount, 0.0);
            }
        }
    }
}

#[test]
fn hands_serialize_to_json_lines() {
    let import = parse_session(ZOOM_SESSION);
    for hand in &import.hands {
        let line = serde_json::to_string(hand).expect("serialize");
        assert!(!line.contains('\n'));
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["id"].as_str(), Some(hand.id.as_str()));
        assert_eq!(v["actions"][0]["kind"].as_str(), Some("posts"));
        assert_eq!(v["actions"][0]["street"].as_str(), Some("preflop"));
    }
}
