//! The dependency table must be populated exactly once, before any other
//! call. This lives in its own test binary so the not-yet-injected state is
//! observable.

use seedwords::{codec, deps, lang, Dependencies, Seed, SeedError};

#[test]
fn injection_ordering_contract() {
    // every entry point refuses to run before injection
    assert!(matches!(
        Seed::create(0),
        Err(SeedError::DependenciesNotInjected)
    ));
    assert!(matches!(
        codec::decode("abandon"),
        Err(SeedError::DependenciesNotInjected)
    ));
    assert!(matches!(
        lang::lookup("English"),
        Err(SeedError::DependenciesNotInjected)
    ));

    deps::inject(Dependencies::default()).unwrap();
    let seed = Seed::create(0).unwrap();
    let english = lang::lookup("English").unwrap();
    codec::encode(&seed, english).unwrap();

    // a second injection is rejected
    assert!(matches!(
        deps::inject(Dependencies::default()),
        Err(SeedError::DependenciesAlreadyInjected)
    ));
}
