pub mod palabra_service;
