use commander_domain::event_generator::EventGenerator;
use commander_macros::{domain_event, event_generator};
use serde::{Deserialize, Serialize};

#[domain_event]
enum ProfileEvent {
    Updated,
}

// 缓冲字段带 #[serde(skip)]，序列化不受影响
#[event_generator(event = ProfileEvent)]
#[derive(Debug, Default, Serialize, Deserialize)]
struct Profile {
    nickname: String,
}

fn main() {
    let mut profile = Profile {
        nickname: "neo".into(),
        ..Default::default()
    };
    profile.raise(ProfileEvent::Updated);
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json, serde_json::json!({ "nickname": "neo" }));

    let decoded: Profile = serde_json::from_value(json).unwrap();
    assert!(decoded.pending_events().is_empty());

    assert_eq!(profile.pending_events().len(), 1);
    assert_eq!(profile.release_events().len(), 1);
}
