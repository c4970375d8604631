//! # アプリケーション構築
//!
//! DI（State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中し、テストは
//! モックリポジトリで構築した State を渡して同じルーターを検証する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use crewwise_domain::clock::Clock;
use crewwise_infra::repository::{
    AssignmentRepository,
    DepartmentRepository,
    EmployeeRepository,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handler::{
        AssignmentState,
        DepartmentState,
        EmployeeState,
        assign_department,
        create_department,
        create_employee,
        delete_department,
        delete_employee,
        get_department,
        get_employee,
        health_check,
        list_departments,
        list_eligible_managers,
        list_employees,
        promote_employee,
        root,
        update_department,
        update_employee,
    },
    usecase::{AssignmentUseCaseImpl, DepartmentUseCaseImpl, EmployeeUseCaseImpl},
};

/// DI コンテナの構築とルーター定義を行う
///
/// リポジトリと Clock を受け取り、ユースケース → State → Router の
/// 順に組み立てる。元の利用形態に合わせ、CORS はすべてのオリジン・
/// メソッド・ヘッダーを許可する。
pub fn build_app(
    employee_repository: Arc<dyn EmployeeRepository>,
    department_repository: Arc<dyn DepartmentRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
    clock: Arc<dyn Clock>,
) -> Router {
    let employee_state = Arc::new(EmployeeState {
        employee_repository: employee_repository.clone(),
        usecase:             EmployeeUseCaseImpl::new(employee_repository.clone(), clock.clone()),
    });

    let department_state = Arc::new(DepartmentState {
        department_repository: department_repository.clone(),
        usecase:               DepartmentUseCaseImpl::new(
            department_repository.clone(),
            employee_repository.clone(),
            clock,
        ),
    });

    let assignment_state = Arc::new(AssignmentState {
        usecase: AssignmentUseCaseImpl::new(
            employee_repository,
            department_repository,
            assignment_repository,
        ),
    });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        // 従業員 API
        .route("/employees", post(create_employee).get(list_employees))
        .route(
            "/employees/{employee_id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/employees/{employee_id}/promote", put(promote_employee))
        .with_state(employee_state)
        // 部署 API
        .route("/departments", post(create_department).get(list_departments))
        .route(
            "/departments/{department_id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .route("/managers", get(list_eligible_managers))
        .with_state(department_state)
        // 配属 API
        .route(
            "/employees/{employee_id}/assign_department/{department_id}",
            put(assign_department),
        )
        .with_state(assignment_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
