use alloc::vec::Vec;
use jeopardy_protocol::ClueRecord;

use crate::*;

/// Where clue data comes from.
///
/// Implemented over HTTP by the web app and by scripted fakes in tests. Calls
/// are made one at a time, never concurrently.
#[allow(async_fn_in_trait)]
pub trait ClueSource {
    type Error;

    /// `count` randomly chosen clues, each naming its category.
    async fn random_clues(
        &mut self,
        count: u8,
    ) -> core::result::Result<Vec<ClueRecord>, Self::Error>;

    /// Every clue the service has for the category, in service order.
    async fn category_clues(
        &mut self,
        id: CategoryId,
    ) -> core::result::Result<Vec<ClueRecord>, Self::Error>;
}
