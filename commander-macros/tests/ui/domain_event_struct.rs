use commander_domain::domain_event::DomainEvent;
use commander_macros::domain_event;

#[domain_event]
struct UserRegistered {
    username: String,
}

#[domain_event(name = "users.Renamed")]
#[derive(PartialEq)]
struct UserRenamed {
    to: String,
}

fn main() {
    let ev = UserRegistered {
        username: "bob".into(),
    };
    // 默认派生 Debug / Clone
    let copy = ev.clone();
    let _ = format!("{:?}", copy);
    assert!(ev.event_name().ends_with(".UserRegistered"));

    let renamed = UserRenamed { to: "b".into() };
    assert_eq!(renamed.clone(), renamed);
    assert_eq!(renamed.event_name(), "users.Renamed");
}
