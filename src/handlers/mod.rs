pub mod palabra_handler;
