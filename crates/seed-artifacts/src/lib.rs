//! CSV artifacts exchanged between delivery-seed stages.
//!
//! Every stage exports the identifiers it created so that a later stage, possibly
//! run by a separate process, can reference them. The files are UTF-8 CSV with a
//! header row; the column names and their order are a fixed contract, and readers
//! reject any file whose header differs.
//!
//! | Artifact        | File                 | Columns                                          |
//! |-----------------|----------------------|--------------------------------------------------|
//! | user ids        | `user_ids.csv`       | `user_id`                                        |
//! | restaurant ids  | `restaurant_ids.csv` | `restaurant_id`                                  |
//! | menu items      | `menu_items.csv`     | `restaurant_id,menu_item_id,price`               |
//! | menu item ids   | `menu_item_ids.csv`  | `menu_item_id`                                   |
//! | orders          | `orders.csv`         | `order_id,user_id,restaurant_id,ordered_at`      |
//! | review ids      | `review_ids.csv`     | `review_id`                                      |
//!
//! # Example
//!
//! ```ignore
//! use seed_artifacts::{Artifact, ArtifactDir};
//!
//! let dir = ArtifactDir::new("data");
//! dir.write_ids(Artifact::UserIds, &user_ids)?;
//! let user_ids = dir.read_ids(Artifact::UserIds)?;
//! ```

mod artifact;
mod dir;
mod error;
mod reader;
mod writer;

pub use artifact::Artifact;
pub use dir::ArtifactDir;
pub use error::ArtifactError;
pub use writer::ArtifactMetrics;
