pub mod sea_orm_entity;
pub mod social_link_repository_postgres;
