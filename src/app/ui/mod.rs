mod panels;

pub(super) use panels::{Status, action_bar, top_bar};
