//! GeoJSON Point 값 객체
//!
//! 사용자 위치는 MongoDB 2dsphere 인덱스가 이해하는 GeoJSON 형태로 저장됩니다.
//!
//! ```json
//! { "type": "Point", "coordinates": [2.35, 48.85] }
//! ```

use serde::{Deserialize, Serialize};
use crate::errors::{AppError, AppResult};
use crate::utils::geo_utils::validate_coordinates;

/// GeoJSON 지오메트리 타입 (Point만 지원)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoJsonType {
    Point,
}

/// GeoJSON Point
///
/// `coordinates`는 `[경도, 위도]` 또는 `[경도, 위도, 고도]`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: GeoJsonType,
    pub coordinates: Vec<f64>,
}

impl GeoPoint {
    /// 좌표를 검증한 뒤 Point를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 길이가 2/3이 아니거나 경도/위도 범위를 벗어난 경우
    pub fn new(coordinates: Vec<f64>) -> AppResult<Self> {
        let point = Self {
            kind: GeoJsonType::Point,
            coordinates,
        };
        point.validate()?;
        Ok(point)
    }

    /// 저장된 좌표를 다시 검증합니다.
    pub fn validate(&self) -> AppResult<()> {
        if validate_coordinates(&self.coordinates) {
            Ok(())
        } else {
            Err(AppError::ValidationError(format!(
                "유효하지 않은 좌표입니다: {:?}",
                self.coordinates
            )))
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn altitude(&self) -> Option<f64> {
        self.coordinates.get(2).copied()
    }
}
