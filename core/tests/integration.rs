//! Full CRUD lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every core client
//! operation over real HTTP using ureq. Validates that the core's request
//! building and response parsing work end-to-end with the actual server.

use directory_core::{ApiError, DirectoryClient, EmployeeUpdate, HttpMethod, HttpResponse, NewEmployee};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: directory_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

#[test]
fn crud_lifecycle() {
    // Step 1: start mock server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    let client = DirectoryClient::new(&format!("http://{addr}"));

    // Step 2: list — should be empty.
    let req = client.build_list_employees();
    let employees = client.parse_list_employees(execute(req)).unwrap();
    assert!(employees.is_empty(), "expected empty directory");

    // Step 3: create an employee; the server assigns a 4-digit id.
    let create_input = NewEmployee {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
    };
    let req = client.build_create_employee(&create_input).unwrap();
    let created = client.parse_create_employee(execute(req)).unwrap();
    assert_eq!(created.message, "User created successfully.");
    assert!((1000..=9999).contains(&created.employee_id));
    let id = created.employee_id;

    // Step 4: get the created employee.
    let req = client.build_get_employee(id);
    let fetched = client.parse_get_employee(execute(req)).unwrap();
    assert_eq!(fetched.employee_id, id);
    assert_eq!(fetched.first_name, "Jane");
    assert_eq!(fetched.last_name, "Doe");

    // Step 5: update both names.
    let update_input = EmployeeUpdate {
        employee_id: id,
        first_name: "Janet".to_string(),
        last_name: "Roe".to_string(),
    };
    let req = client.build_update_employee(id, &update_input).unwrap();
    let reply = client.parse_update_employee(execute(req)).unwrap();
    assert_eq!(reply.message, "User updated successfully.");

    let req = client.build_get_employee(id);
    let fetched = client.parse_get_employee(execute(req)).unwrap();
    assert_eq!(fetched.first_name, "Janet");
    assert_eq!(fetched.last_name, "Roe");

    // Step 6: update a missing id — distinct not-found error.
    let missing = if id == 9999 { 1000 } else { id + 1 };
    let req = client.build_update_employee(missing, &update_input).unwrap();
    let err = client.parse_update_employee(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 7: server rejects invalid names the client would also reject.
    let bad_input = EmployeeUpdate {
        employee_id: id,
        first_name: "J4net".to_string(),
        last_name: "Roe".to_string(),
    };
    let req = client.build_update_employee(id, &bad_input).unwrap();
    let err = client.parse_update_employee(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 400, .. }));

    // Step 8: list — should have one entry.
    let req = client.build_list_employees();
    let employees = client.parse_list_employees(execute(req)).unwrap();
    assert_eq!(employees.len(), 1);

    // Step 9: delete; the reply message is what the host shows the user.
    let req = client.build_delete_employee(id);
    let reply = client.parse_delete_employee(execute(req)).unwrap();
    assert_eq!(reply.message, "User deleted successfully.");

    // Step 10: get after delete — should be NotFound.
    let req = client.build_get_employee(id);
    let err = client.parse_get_employee(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 11: delete again — should be NotFound.
    let req = client.build_delete_employee(id);
    let err = client.parse_delete_employee(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 12: list — should be empty again.
    let req = client.build_list_employees();
    let employees = client.parse_list_employees(execute(req)).unwrap();
    assert!(employees.is_empty(), "expected empty directory after delete");
}
