// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use migration::{Migrator, MigratorTrait};
use orderdesk::application::use_cases::order_interactor::{
    AdminOrderInteractor, OrderInteractor, OrderUseCase,
};
use orderdesk::config::settings::Settings;
use orderdesk::domain::logging::Logger;
use orderdesk::infrastructure::database::connection;
use orderdesk::infrastructure::observability::{logger::TracingLogger, metrics};
use orderdesk::infrastructure::repositories::{
    item_repo_impl::ItemRepositoryImpl, order_repo_impl::OrderRepositoryImpl,
    user_repo_impl::UserRepositoryImpl,
};
use orderdesk::presentation::routes;
use orderdesk::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging and metrics
    telemetry::init_telemetry(&settings.telemetry);
    info!("Starting orderdesk...");
    metrics::init_metrics(&settings.metrics);

    // 3. Connect to database
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Wire repositories and use cases
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let order_repo = Arc::new(OrderRepositoryImpl::new(db.clone()));
    let item_repo = Arc::new(ItemRepositoryImpl::new(db.clone()));
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

    let orders: Arc<dyn OrderUseCase> = Arc::new(OrderInteractor::new(
        user_repo.clone(),
        order_repo.clone(),
        item_repo.clone(),
        logger.clone(),
    ));
    let admin_orders: Arc<dyn OrderUseCase> = Arc::new(AdminOrderInteractor::new_admin(
        user_repo, order_repo, item_repo, logger,
    ));

    // 5. Start HTTP server
    let app = routes::routes(orders, admin_orders);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
