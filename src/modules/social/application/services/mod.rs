pub mod social_link_services;
