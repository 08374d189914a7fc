use std::fmt;

use rust_decimal::Decimal;

/// Static site content for the training program. Built once in `main` and
/// injected into handlers through `AppState`; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct TrainingInfo {
    pub name: String,
    pub is_available: bool,
    pub address_one: String,
    pub address_two: String,
    pub phone: String,
    pub sessions: Vec<TrainingSession>,
}

#[derive(Debug, Clone)]
pub struct TrainingSession {
    pub name: String,
    pub players: String,
    pub price: SessionPrice,
    pub description: String,
}

/// Per-player price. Custom sessions are priced when booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPrice {
    PerPlayer(Decimal),
    ToBeDetermined,
}

impl fmt::Display for SessionPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPrice::PerPlayer(amount) => write!(f, "${amount} per player"),
            SessionPrice::ToBeDetermined => write!(f, "TO BE DETERMINED"),
        }
    }
}

impl TrainingInfo {
    pub fn dynamic_soccer() -> Self {
        Self {
            name: "Dynamic Soccer Training Sessions".to_string(),
            is_available: true,
            address_one: "11536 Bailey Rd, Cornelius, NC  28031".to_string(),
            address_two: "13789 Beatties Ford Rd, Huntersville, NC  28078".to_string(),
            phone: "704.777.3112".to_string(),
            sessions: vec![
                TrainingSession {
                    name: "One On One Dynamic Session".to_string(),
                    players: "MAX 2 Players".to_string(),
                    price: SessionPrice::PerPlayer(Decimal::new(4500, 2)),
                    description: "A personlized session for your player to develop their skills and game undestanding through experiential activities.".to_string(),
                },
                TrainingSession {
                    name: "Small Group Dynamic Session".to_string(),
                    players: "MAX 8 Players".to_string(),
                    price: SessionPrice::PerPlayer(Decimal::new(3500, 2)),
                    description: "A personlized session that has technical focus, tactical awareness individually and as a team unit".to_string(),
                },
                TrainingSession {
                    name: "Large Group/Team Dynamic Session".to_string(),
                    players: "MAX 24 Players".to_string(),
                    price: SessionPrice::PerPlayer(Decimal::new(2500, 2)),
                    description: "A personlized session for a large group that allows for specific teamwork and tactical awareness".to_string(),
                },
                TrainingSession {
                    name: "Custom Group Dynamic Session".to_string(),
                    players: "TO BE DETERMINED".to_string(),
                    price: SessionPrice::ToBeDetermined,
                    description: "Discussed prior to final booking. Determine exact needs and wants.".to_string(),
                },
            ],
        }
    }
}
