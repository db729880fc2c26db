use crate::{Comment, UserSummary};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentDetail {
    pub comment: Comment,
    pub author: UserSummary,
}
