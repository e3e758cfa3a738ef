use super::UserSource;
use crate::error::Result;
use crate::model::{DraftUser, StatusCode, User, UserId};
use curl::easy::{Easy, List};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Blocking source over a REST collection endpoint.
///
/// One curl handle per request, a single attempt each, no timeout.
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: Url,
}

impl HttpSource {
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// `{endpoint}/{id}`, tolerating a trailing slash on the collection URL.
    pub fn member_url(&self, id: UserId) -> String {
        format!("{}/{}", self.endpoint.as_str().trim_end_matches('/'), id)
    }

    fn perform(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<(StatusCode, Vec<u8>)> {
        log::debug!("{:?} {}", method, url);
        let mut easy = Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;

        let mut headers = List::new();
        headers.append("Accept: application/json")?;
        if let Some(body) = body {
            headers.append("Content-Type: application/json")?;
            easy.post_fields_copy(&body)?;
        }
        match method {
            Method::Get => easy.get(true)?,
            Method::Post => easy.post(true)?,
            Method::Patch => easy.custom_request("PATCH")?,
            Method::Delete => easy.custom_request("DELETE")?,
        }
        easy.http_headers(headers)?;

        let mut response = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let status = StatusCode(easy.response_code()?);
        log::debug!("{:?} {} -> {} ({} bytes)", method, url, status, response.len());
        Ok((status, response))
    }
}

impl UserSource for HttpSource {
    fn list_users(&self) -> Result<Vec<User>> {
        let (_, body) = self.perform(Method::Get, self.endpoint.as_str(), None)?;
        parse_users(&body)
    }

    fn create_user(&self, draft: &DraftUser) -> Result<StatusCode> {
        let body = serde_json::to_vec(draft)?;
        let (status, _) = self.perform(Method::Post, self.endpoint.as_str(), Some(body))?;
        Ok(status)
    }

    fn update_user(&self, user: &User) -> Result<StatusCode> {
        let body = serde_json::to_vec(user)?;
        let url = self.member_url(user.id);
        let (status, _) = self.perform(Method::Patch, &url, Some(body))?;
        Ok(status)
    }

    fn delete_user(&self, id: UserId) -> Result<StatusCode> {
        let url = self.member_url(id);
        let (status, _) = self.perform(Method::Delete, &url, None)?;
        Ok(status)
    }
}

/// Decode a collection body. Anything other than a JSON array of users is an error.
pub fn parse_users(body: &[u8]) -> Result<Vec<User>> {
    Ok(serde_json::from_slice(body)?)
}
