//! Employee HTTP handlers.
//!
//! ```text
//! POST   /employees
//! GET    /employees
//! GET    /employees/search?firstName=&lastName=
//! GET    /employees/{id}
//! PUT    /employees/{id}
//! DELETE /employees/{id}
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Employee, EmployeeDetails, EmployeeId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_employee_id, require};

/// Body returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "Employee deleted successfully!";

const FIRST_NAME: FieldName = FieldName::new("firstName");
const LAST_NAME: FieldName = FieldName::new("lastName");
const ID: FieldName = FieldName::new("id");

/// Request payload for creating or replacing an employee.
///
/// Any `id` supplied by the client is ignored. Absent or `null` fields are
/// stored as empty text; content is not validated.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[schema(example = "Lucas")]
    pub first_name: Option<String>,
    #[schema(example = "Barbosa")]
    pub last_name: Option<String>,
    #[schema(example = "lucas@hotmail.com")]
    pub email: Option<String>,
}

impl From<EmployeeRequest> for EmployeeDetails {
    fn from(value: EmployeeRequest) -> Self {
        Self {
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
        }
    }
}

/// Response payload describing a stored employee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Lucas")]
    pub first_name: String,
    #[schema(example = "Barbosa")]
    pub last_name: String,
    #[schema(example = "lucas@hotmail.com")]
    pub email: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        let (id, details) = value.into_parts();
        Self {
            id: id.get(),
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
        }
    }
}

/// Query parameters for the exact name lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeSearchParams {
    /// Exact first name to match.
    pub first_name: Option<String>,
    /// Exact last name to match.
    pub last_name: Option<String>,
}

fn employee_not_found(id: EmployeeId) -> Error {
    Error::not_found(format!("employee does not exist with id: {id}")).with_details(json!({
        "id": id.get(),
        "code": "employee_not_found",
    }))
}

/// Register the employee endpoints.
///
/// The search route is registered ahead of `/employees/{id}` so that
/// `search` is never captured as an id. Malformed JSON bodies are reported
/// with the standard error envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(create_employee)
        .service(list_employees)
        .service(search_employees)
        .service(get_employee)
        .service(update_employee)
        .service(delete_employee);
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 409, description = "Email already in use", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let details = EmployeeDetails::from(payload.into_inner());
    let employee = state.employees.create(details).await?;
    Ok(HttpResponse::Created().json(EmployeeResponse::from(employee)))
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<EmployeeResponse>>> {
    let employees = state.employees_query.list().await?;
    Ok(web::Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// Find an employee by exact first and last name.
#[utoipa::path(
    get,
    path = "/employees/search",
    params(EmployeeSearchParams),
    responses(
        (status = 200, description = "Matching employee", body = EmployeeResponse),
        (status = 400, description = "Missing query parameter", body = ErrorSchema),
        (status = 404, description = "No employee matches", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "searchEmployees"
)]
#[get("/employees/search")]
pub async fn search_employees(
    state: web::Data<HttpState>,
    params: web::Query<EmployeeSearchParams>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let EmployeeSearchParams {
        first_name,
        last_name,
    } = params.into_inner();
    let first_name = require(first_name, FIRST_NAME)?;
    let last_name = require(last_name, LAST_NAME)?;

    state
        .employees_query
        .find_by_name(&first_name, &last_name)
        .await?
        .map(|employee| web::Json(EmployeeResponse::from(employee)))
        .ok_or_else(|| {
            Error::not_found(format!(
                "employee does not exist with name: {first_name} {last_name}"
            ))
            .with_details(json!({
                "firstName": first_name,
                "lastName": last_name,
                "code": "employee_not_found",
            }))
        })
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee", body = EmployeeResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let id = parse_employee_id(&path, ID)?;
    state
        .employees_query
        .get(id)
        .await?
        .map(|employee| web::Json(EmployeeResponse::from(employee)))
        .ok_or_else(|| employee_not_found(id))
}

/// Replace an employee's fields.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let id = parse_employee_id(&path, ID)?;
    let details = EmployeeDetails::from(payload.into_inner());
    let employee = state.employees.update(id, details).await?;
    Ok(web::Json(EmployeeResponse::from(employee)))
}

/// Delete an employee. Deleting an unknown id also succeeds.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed id", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_employee_id(&path, ID)?;
    state.employees.delete(id).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(DELETE_CONFIRMATION))
}
