use camp_core::ops::{activity_ops, camper_ops, signup_ops};
use camp_core::{RecordId, Store};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Ids of the records created by [`seed_camp`]
#[allow(dead_code)]
pub struct Seeded {
    pub archery: RecordId,
    pub canoeing: RecordId,
    pub alex: RecordId,
    pub sam: RecordId,
}

/// Two activities, two campers and three signups:
/// Alex -> archery@9, Alex -> canoeing@14, Sam -> archery@10
#[allow(dead_code)]
pub fn seed_camp(store: &mut Store) -> Seeded {
    let archery =
        activity_ops::create_activity(store, Some("Archery".to_string()), Some(2)).unwrap();
    let canoeing =
        activity_ops::create_activity(store, Some("Canoeing".to_string()), Some(3)).unwrap();
    let alex = camper_ops::create_camper(store, Some("Alex"), 12).unwrap();
    let sam = camper_ops::create_camper(store, Some("Sam"), 15).unwrap();

    signup_ops::create_signup(store, 9, alex, archery).unwrap();
    signup_ops::create_signup(store, 14, alex, canoeing).unwrap();
    signup_ops::create_signup(store, 10, sam, archery).unwrap();

    Seeded {
        archery,
        canoeing,
        alex,
        sam,
    }
}
