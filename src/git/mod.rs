pub mod blame;
pub mod repository;

pub use repository::GitRepository;
