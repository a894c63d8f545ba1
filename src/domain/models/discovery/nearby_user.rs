//! 근접 검색 결과 모델

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 근접 검색 한 건
///
/// `$geoNear` 파이프라인의 `$project` 단계와 같은 필드만 가집니다.
/// 자격 증명과 그 밖의 속성은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyUser {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    /// 기준점으로부터의 대원 거리 (미터)
    pub distance: f64,
}
