#![allow(dead_code)]

use dog_service_client::contract::Interaction;
use httpmock::Mock;
use httpmock::prelude::*;

/// Replay `interaction` on `server` the way a contract mock provider would:
/// the request must match exactly, the response is the recorded example.
pub async fn mount<'a>(server: &'a MockServer, interaction: &Interaction) -> Mock<'a> {
    assert_eq!(
        interaction.request.method,
        http::Method::GET,
        "only GET interactions are replayed"
    );

    let request = interaction.request.clone();
    let response = interaction.response.clone();

    server
        .mock_async(move |when, then| {
            let mut when = when.method(GET).path(request.path.as_str());
            for (name, value) in &request.query {
                when = when.query_param(name.as_str(), value.as_str());
            }
            for (name, value) in &request.headers {
                when = when.header(name.as_str(), value.as_str());
            }

            let mut then = then.status(response.status.as_u16());
            for (name, value) in &response.headers {
                then = then.header(name.as_str(), value.as_str());
            }
            then.json_body(response.example_body());
        })
        .await
}

/// A base URL nothing listens on
pub fn unreachable_endpoint() -> std::io::Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{port}"))
}
