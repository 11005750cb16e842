use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait ActivityQueries {
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, Activity>>;
}
