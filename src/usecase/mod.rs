pub mod registration_usecase;
