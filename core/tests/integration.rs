//! List/get/update round-trip against the live server.
//!
//! # Design
//! Starts the server on a random port with two seeded items, then exercises
//! every client operation over real HTTP using ureq.

use todo_api::{InMemoryStore, TodoItem, TodoItemService, TodoStore};
use todo_core::{ApiError, HttpMethod, HttpResponse, TodoClient, TodoItemDto};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// 4xx/5xx responses are returned as data rather than `Err`, so the client
/// core does the status interpretation.
fn execute(req: todo_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
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

fn seed(id: i64, name: &str) -> TodoItem {
    TodoItem {
        id,
        name: name.to_string(),
        is_complete: false,
        secret: format!("Secret{id}"),
    }
}

#[test]
fn list_get_update_round_trip() {
    // Step 1: start the server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = InMemoryStore::new();
            store.insert(seed(1, "Wash hands")).await.unwrap();
            store.insert(seed(2, "Walk dog")).await.unwrap();
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_api::run(listener, TodoItemService::new(store)).await
        })
        .unwrap();
    });

    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 2: list the seeded items.
    let items = client.parse_list_items(execute(client.build_list_items())).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Wash hands");

    // Step 3: get one.
    let fetched = client.parse_get_item(execute(client.build_get_item(2))).unwrap();
    assert_eq!(fetched.name, "Walk dog");
    assert!(!fetched.is_complete);

    // Step 4: get a non-positive id.
    let err = client.parse_get_item(execute(client.build_get_item(0))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 5: update it.
    let done = TodoItemDto {
        is_complete: true,
        ..fetched
    };
    let req = client.build_update_item(2, &done).unwrap();
    client.parse_update_item(execute(req)).unwrap();

    let fetched = client.parse_get_item(execute(client.build_get_item(2))).unwrap();
    assert_eq!(fetched, done);

    // Step 6: mismatched ids.
    let req = client.build_update_item(1, &done).unwrap();
    let err = client.parse_update_item(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    // Step 7: update an id that was never stored.
    let ghost = TodoItemDto {
        id: 42,
        name: "Ghost".to_string(),
        is_complete: true,
    };
    let req = client.build_update_item(42, &ghost).unwrap();
    let err = client.parse_update_item(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}
