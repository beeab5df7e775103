use std::sync::{Arc, Mutex};
use crate::catalog::seed::{CatalogSeedEntry, load_collection};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::lending::domain::LendingService;
use crate::lending::domain::model::Library;
use crate::lending::domain::service::LendingServiceImpl;

pub fn create_library(config: &Configuration, seed: &[CatalogSeedEntry]) -> Arc<Mutex<Library>> {
    Arc::new(Mutex::new(Library::new(config, seed)))
}

pub fn load_library(config: &Configuration) -> LibraryResult<Arc<Mutex<Library>>> {
    let seed = load_collection(config.collection_path.as_str())?;
    Ok(create_library(config, &seed))
}

pub fn create_lending_service(config: &Configuration, library: Arc<Mutex<Library>>,
                              publisher: Arc<dyn EventPublisher>) -> Box<dyn LendingService> {
    Box::new(LendingServiceImpl::new(config, library, publisher))
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::gateway::factory::create_publisher;
    use crate::lending::domain::LendingService;
    use crate::lending::domain::model::tests::seed;
    use crate::lending::factory::{create_lending_service, create_library, load_library};

    pub(crate) fn create_test_service() -> Box<dyn LendingService> {
        let config = Configuration::new("test");
        create_lending_service(&config, create_library(&config, &seed()), create_publisher(&config))
    }

    #[tokio::test]
    async fn test_should_share_library_between_services() {
        let config = Configuration::new("test");
        let library = create_library(&config, &seed());
        let first = create_lending_service(&config, library.clone(), create_publisher(&config));
        let second = create_lending_service(&config, library, create_publisher(&config));
        first.open().await.expect("should open");
        assert_eq!(Err(LibraryError::already_open()), second.open().await);
    }

    #[tokio::test]
    async fn test_should_fail_to_load_missing_collection() {
        let mut config = Configuration::new("test");
        config.collection_path = "does/not/exist.txt".to_string();
        assert!(matches!(load_library(&config), Err(LibraryError::Runtime { .. })));
    }
}
