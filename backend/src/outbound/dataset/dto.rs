//! DTOs for decoding the XML user dataset.
//!
//! Rows carry many more elements than the store keeps (guid, balance, email
//! and so on); serde skips them.

use serde::Deserialize;

use crate::domain::{Gender, User};

#[derive(Debug, Deserialize)]
pub(super) struct DatasetDto {
    #[serde(rename = "row", default)]
    pub(super) rows: Vec<RowDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RowDto {
    pub(super) id: i64,
    pub(super) age: u32,
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) gender: String,
    #[serde(default)]
    pub(super) about: String,
}

impl DatasetDto {
    pub(super) fn into_domain_users(self) -> Result<Vec<User>, String> {
        self.rows.into_iter().map(RowDto::into_domain_user).collect()
    }
}

impl RowDto {
    fn into_domain_user(self) -> Result<User, String> {
        let gender = match self.gender.trim() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            other => return Err(format!("row {} has unknown gender {other:?}", self.id)),
        };
        Ok(User::from_parts(
            self.id,
            self.first_name.trim(),
            self.last_name.trim(),
            self.age,
            self.about,
            gender,
        ))
    }
}
