//! Request and response bodies of the chat server REST API.
//!
//! Only the fields this app reads are declared; everything else in the
//! server's responses is ignored. A missing declared field fails decoding.

use serde::{Deserialize, Serialize};

use crate::models::Department;

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub user: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub auth_token: String,
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentAgentsResponse {
    pub agents: Vec<DepartmentAgent>,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentAgent {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct UserInfoResponse {
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentResponse {
    #[serde(default)]
    pub department: Option<DepartmentEntry>,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentsResponse {
    pub departments: Vec<DepartmentEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub num_agents: u32,
}

impl From<DepartmentEntry> for Department {
    fn from(entry: DepartmentEntry) -> Self {
        Department {
            name: entry.name.unwrap_or_default(),
            id: entry.id,
            enabled: entry.enabled,
            num_agents: entry.num_agents,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub message: OutgoingMessage<'a>,
}

#[derive(Debug, Serialize)]
pub struct OutgoingMessage<'a> {
    pub rid: &'a str,
    pub msg: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CloseRoomRequest<'a> {
    pub rid: &'a str,
    pub comment: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_reads_nested_data() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "status": "success",
            "data": {"authToken": "T", "userId": "U", "me": {"username": "admin"}}
        }))
        .unwrap();
        assert_eq!(resp.data.auth_token, "T");
        assert_eq!(resp.data.user_id, "U");
    }

    #[test]
    fn agents_response_requires_agents_field() {
        let missing = serde_json::from_value::<DepartmentAgentsResponse>(json!({"success": true}));
        assert!(missing.is_err());

        let resp: DepartmentAgentsResponse = serde_json::from_value(json!({
            "agents": [{"username": "alice", "_id": "a1"}, {"username": "bob"}],
            "success": true
        }))
        .unwrap();
        let names: Vec<_> = resp.agents.into_iter().map(|a| a.username).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn department_entry_maps_to_department() {
        let entry: DepartmentEntry = serde_json::from_value(json!({
            "_id": "d1", "name": "Sales", "enabled": true, "numAgents": 2
        }))
        .unwrap();
        let department = Department::from(entry);
        assert_eq!(department.id, "d1");
        assert_eq!(department.name, "Sales");
        assert!(department.is_selectable());
    }
}
