//! In-memory stand-in for the employee directory service.
//!
//! Mirrors the real server's observable contract — status codes, message
//! bodies, name validation, and random 4-digit id assignment — over a
//! `HashMap` instead of a database. Used by integration tests and runnable
//! standalone via the `mock-server` binary.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: u32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
}

/// Update payload. The id in the request path is authoritative; clients also
/// repeat it in the body, which the server accepts and ignores.
#[derive(Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default)]
    pub employee_id: Option<u32>,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize)]
pub struct Reply {
    pub message: String,
}

#[derive(Serialize)]
pub struct CreatedReply {
    pub message: String,
    pub employee_id: u32,
}

pub type Db = Arc<RwLock<HashMap<u32, Employee>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/users", get(list_employees).post(create_employee))
        .route("/users/{id}", get(get_employee).put(update_employee).delete(delete_employee))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

fn reply(message: &str) -> Json<Reply> {
    Json(Reply {
        message: message.to_string(),
    })
}

fn bad_name() -> (StatusCode, Json<Reply>) {
    (StatusCode::BAD_REQUEST, reply("Please enter alphabetical characters Only"))
}

fn not_found() -> (StatusCode, Json<Reply>) {
    (StatusCode::NOT_FOUND, reply("Entry does not exist"))
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Employee>> {
    let employees = db.read().await;
    let mut all: Vec<Employee> = employees.values().cloned().collect();
    all.sort_by_key(|e| e.employee_id);
    Json(all)
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<NewEmployee>,
) -> Result<(StatusCode, Json<CreatedReply>), (StatusCode, Json<Reply>)> {
    if !is_valid_name(&input.first_name) || !is_valid_name(&input.last_name) {
        return Err(bad_name());
    }

    let mut employees = db.write().await;

    // Random unique 4-digit id, bounded retries like the real service.
    let mut employee_id = None;
    for _ in 0..10 {
        let candidate = rand::thread_rng().gen_range(1000..=9999);
        if !employees.contains_key(&candidate) {
            employee_id = Some(candidate);
            break;
        }
    }
    let employee_id = employee_id.ok_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        reply("Could not generate a unique employee ID after multiple attempts."),
    ))?;

    employees.insert(
        employee_id,
        Employee {
            employee_id,
            first_name: input.first_name,
            last_name: input.last_name,
        },
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedReply {
            message: "User created successfully.".to_string(),
            employee_id,
        }),
    ))
}

async fn get_employee(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Employee>, (StatusCode, Json<Reply>)> {
    let employees = db.read().await;
    employees.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(input): Json<EmployeeUpdate>,
) -> Result<Json<Reply>, (StatusCode, Json<Reply>)> {
    if !is_valid_name(&input.first_name) || !is_valid_name(&input.last_name) {
        return Err(bad_name());
    }
    let mut employees = db.write().await;
    let employee = employees.get_mut(&id).ok_or_else(not_found)?;
    employee.first_name = input.first_name;
    employee.last_name = input.last_name;
    Ok(reply("User updated successfully."))
}

async fn delete_employee(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Reply>, (StatusCode, Json<Reply>)> {
    let mut employees = db.write().await;
    employees
        .remove(&id)
        .map(|_| reply("User deleted successfully."))
        .ok_or_else(not_found)
}
