// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::{
    application::{commands::guard::ensure_admin, error::ApplicationResult},
    domain::{account::AdminSession, product::ProductId},
};

pub struct DeleteProductCommand {
    pub id: i64,
}

impl ProductCommandService {
    pub async fn delete_product(
        &self,
        actor: &AdminSession,
        command: DeleteProductCommand,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;

        let id = ProductId::new(command.id)?;
        self.write_repo.delete(id).await?;

        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
