use serde::Serialize;

/// `last_visited_page` is null until one of the pages has been visited
#[derive(Debug, Serialize)]
pub struct LastVisitedResponse {
    pub last_visited_page: Option<String>,
}
