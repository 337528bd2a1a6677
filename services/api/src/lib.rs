mod cli;
mod infra;
mod routes;
mod server;
mod worksheet;

use seller_proceeds::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
