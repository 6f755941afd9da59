use shaper_core::{
    MappingRegistry, QueryError,
    catalog::default_registry,
    shaper_model::{Author, AuthorDto},
};

// Installation is process-wide, so the whole lifecycle lives in one test.
#[test]
fn registry_installs_once() {
    assert_eq!(
        MappingRegistry::global().unwrap_err(),
        QueryError::RegistryNotInstalled
    );

    let installed = default_registry().unwrap().install().unwrap();
    let global = MappingRegistry::global().unwrap();
    assert!(std::ptr::eq(installed, global));
    assert!(
        global
            .valid_mapping_exists_for::<AuthorDto, Author>("age desc")
            .unwrap()
    );

    let err = default_registry().unwrap().install().unwrap_err();
    assert_eq!(err, QueryError::RegistryAlreadyInstalled);
}
