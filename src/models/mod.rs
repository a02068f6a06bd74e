pub mod palabra;
