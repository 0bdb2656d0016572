//! Executes core `HttpRequest`s over the network with reqwest.
//!
//! Status codes are returned as data; the core decides what a non-2xx means.
//! Only failures to complete the round-trip become `ApiError::Transport`.

use fetchdemo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Outcome};

#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fetchdemo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub async fn execute(&self, request: HttpRequest) -> Outcome {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");

        let mut builder = self.client.request(method, &request.path);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(key, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (key.to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fetchdemo_core::RestClient;

    async fn start_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(mock_server::run(listener));
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn executes_get_and_returns_body() {
        let base_url = start_server().await;
        let client = RestClient::new(&base_url);
        let transport = Transport::new().unwrap();

        let response = transport.execute(client.build_list_users()).await.unwrap();
        assert_eq!(response.status, 200);
        let users = client.parse_list_users(response).unwrap();
        assert_eq!(users[0].name, "Leanne Graham");
    }

    #[tokio::test]
    async fn non_2xx_is_returned_as_data() {
        let base_url = start_server().await;
        let client = RestClient::new(&base_url);
        let transport = Transport::new().unwrap();

        let response = transport.execute(client.build_delete_post(9999)).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn sends_json_body() {
        let base_url = start_server().await;
        let client = RestClient::new(&base_url);
        let transport = Transport::new().unwrap();

        let draft = fetchdemo_core::PostDraft {
            user_id: 2,
            title: "over the wire".to_string(),
            body: String::new(),
        };
        let response = transport
            .execute(client.build_create_post(&draft).unwrap())
            .await
            .unwrap();
        let post = client.parse_create_post(response).unwrap();
        assert_eq!(post.title, "over the wire");
        assert_eq!(post.user_id, 2);
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = RestClient::new(&format!("http://127.0.0.1:{port}"));
        let transport = Transport::new().unwrap();

        let err = transport.execute(client.build_list_users()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
