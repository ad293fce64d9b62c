//! Accounts module: three-layer architecture (domain, repository, service).
//!
//! The mapper is the only place that knows both the DTO and the stored entity.

pub mod domain;
pub mod mapper;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::BankAccountDto;
pub use mapper::BankAccountMapper;
pub use repository::AccountRepository;
pub use service::AccountService;
