use anyhow::Result;

use crate::connector::http;

use super::super::Container;

pub struct ServeController<'a> {
    container: &'a Container,
}

impl<'a> ServeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn serve(&self, host: &str, port: u16) -> Result<String> {
        let addr = format!("{host}:{port}");
        http::serve(&addr, self.container).await?;
        Ok("Server stopped.".to_string())
    }
}
