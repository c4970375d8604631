//! # CrewWise API サーバー
//!
//! 従業員・部署・配属を管理する CRUD API サーバー。
//!
//! ## 役割
//!
//! - **従業員管理**: 登録・取得・更新・削除・マネージャへの昇進
//! - **部署管理**: 作成・取得・更新・削除（マネージャは勤続 5 年以上）
//! - **配属管理**: 従業員と部署の対応付け（一人一部署）
//!
//! データベースが唯一の信頼できる状態であり、プロセスは接続プール以外の
//! 状態をリクエスト間で保持しない。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p crewwise-api
//!
//! # 本番環境
//! API_PORT=8000 DATABASE_URL=postgres://... cargo run -p crewwise-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use crewwise_api::{app_builder::build_app, config::ApiConfig};
use crewwise_domain::clock::{Clock, SystemClock};
use crewwise_infra::{
   db,
   repository::{
      AssignmentRepository,
      DepartmentRepository,
      EmployeeRepository,
      PostgresAssignmentRepository,
      PostgresDepartmentRepository,
      PostgresEmployeeRepository,
   },
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,crewwise=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   tracing::info!("データベースに接続しました");

   // 依存コンポーネントを初期化
   // 具象型で作成し、State 注入時に必要なトレイトオブジェクトへ coerce する
   let employee_repository: Arc<dyn EmployeeRepository> =
      Arc::new(PostgresEmployeeRepository::new(pool.clone()));
   let department_repository: Arc<dyn DepartmentRepository> =
      Arc::new(PostgresDepartmentRepository::new(pool.clone()));
   let assignment_repository: Arc<dyn AssignmentRepository> =
      Arc::new(PostgresAssignmentRepository::new(pool.clone()));
   let clock: Arc<dyn Clock> = Arc::new(SystemClock);

   // ルーター構築
   let app = build_app(
      employee_repository,
      department_repository,
      assignment_repository,
      clock,
   );

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   // 接続プールを明示的に閉じる
   pool.close().await;

   Ok(())
}
