//! # CrewWise API ライブラリ
//!
//! 従業員・部署・配属管理 API のコアモジュール。
//! ルーター構築をテストから再利用できるよう、バイナリとは別に公開する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の組み立てとルーター定義
//! - `config`: 環境変数からの設定読み込み
//! - `error`: HTTP レスポンスへのエラー変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: ビジネスロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
