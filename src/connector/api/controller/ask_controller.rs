use anyhow::Result;

use crate::{Query, QueryMode};

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, prompt: String, mode: QueryMode) -> Result<String> {
        let query = Query::new(prompt, mode)?;
        let use_case = self.container.ask_use_case()?;

        let answer = use_case.execute(&query).await?;

        Ok(answer)
    }
}
