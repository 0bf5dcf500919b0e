use std::sync::Arc;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateItemUseCase, DeleteItemUseCase, GetItemUseCase, ListItemsByCategoryUseCase,
    ListItemsUseCase, UpdateItemUseCase,
};
use crate::modules::catalog::application::ports::outgoing::ItemStore;
use crate::modules::catalog::application::services::item_services::{
    CreateItemService, DeleteItemService, GetItemService, ListItemsByCategoryService,
    ListItemsService, UpdateItemService,
};
use crate::modules::catalog::domain::item::CatalogFamily;

/// One handler bundle per item family; `AppState` holds four of these.
#[derive(Clone)]
pub struct CatalogUseCases<F: CatalogFamily> {
    pub list: Arc<dyn ListItemsUseCase<F>>,
    pub list_by_category: Arc<dyn ListItemsByCategoryUseCase<F>>,
    pub create: Arc<dyn CreateItemUseCase<F>>,
    pub get: Arc<dyn GetItemUseCase<F>>,
    pub update: Arc<dyn UpdateItemUseCase<F>>,
    pub delete: Arc<dyn DeleteItemUseCase<F>>,
}

impl<F: CatalogFamily> CatalogUseCases<F> {
    /// Wires every use case of a family onto one store.
    pub fn wire<S>(store: S) -> Self
    where
        S: ItemStore + Clone + 'static,
    {
        Self {
            list: Arc::new(ListItemsService::<F, S>::new(store.clone())),
            list_by_category: Arc::new(ListItemsByCategoryService::<F, S>::new(store.clone())),
            create: Arc::new(CreateItemService::<F, S>::new(store.clone())),
            get: Arc::new(GetItemService::<F, S>::new(store.clone())),
            update: Arc::new(UpdateItemService::<F, S>::new(store.clone())),
            delete: Arc::new(DeleteItemService::<F, S>::new(store)),
        }
    }
}
