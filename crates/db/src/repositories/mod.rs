//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Read methods accept `&PgPool`; methods that must participate in a caller's
//! transaction accept `&mut PgConnection` instead.

pub mod domain_repo;
pub mod prompt_image_repo;
pub mod prompt_repo;
pub mod subtopic_repo;
pub mod taxonomy_repo;

pub use domain_repo::DomainRepo;
pub use prompt_image_repo::PromptImageRepo;
pub use prompt_repo::PromptRepo;
pub use subtopic_repo::SubtopicRepo;
pub use taxonomy_repo::TaxonomyRepo;
