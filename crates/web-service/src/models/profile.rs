//! 个人资料接口的请求/响应模型

use chrono::{DateTime, Utc};
use database::{ProfileInfo, ProfileUpdate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 个人资料更新请求
///
/// `avatar` 为 null 表示"未重新上传头像"，保留原值
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    #[validate(email)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub github: String,

    #[serde(default)]
    pub twitter: String,

    #[serde(default)]
    pub linkedin: String,

    #[serde(default)]
    pub wechat: String,

    /// 逗号分隔的技能列表
    #[serde(default)]
    pub skills: String,

    #[serde(default)]
    pub avatar: Option<String>,
}

impl From<ProfileRequest> for ProfileUpdate {
    fn from(req: ProfileRequest) -> Self {
        ProfileUpdate {
            name: req.name,
            title: req.title,
            bio: req.bio,
            email: req.email,
            phone: req.phone,
            location: req.location,
            github: req.github,
            twitter: req.twitter,
            linkedin: req.linkedin,
            wechat: req.wechat,
            skills: req.skills,
            avatar: req.avatar,
        }
    }
}

/// 个人资料响应对象
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
    pub wechat: String,
    pub skills: String,
    pub avatar: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileInfo> for ProfileResponse {
    fn from(info: ProfileInfo) -> Self {
        ProfileResponse {
            name: info.name,
            title: info.title,
            bio: info.bio,
            email: info.email,
            phone: info.phone,
            location: info.location,
            github: info.github,
            twitter: info.twitter,
            linkedin: info.linkedin,
            wechat: info.wechat,
            skills: info.skills,
            avatar: info.avatar,
            updated_at: info.updated_at,
        }
    }
}
