//! Real PokerStars hand histories shared by the integration tests.

#![allow(dead_code)]

/// One complete zoom hand that ends on the turn.
pub const SINGLE_HAND: &str = include_str!("../data/single_hand.txt");

/// Three hands; the second has a raise with no currency marker.
pub const BROKEN_SESSION: &str = include_str!("../data/broken_session.txt");

/// Two zoom hands, the second going to showdown.
pub const ZOOM_SESSION: &str = include_str!("../data/zoom_session.txt");

/// Two cash game hands with table join/leave chatter.
pub const CASH_SESSION: &str = include_str!("../data/cash_session.txt");

/// All-in on the turn, river dealt twice.
pub const RUN_IT_TWICE: &str = include_str!("../data/run_it_twice.txt");
