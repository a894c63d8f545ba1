//! # 좌표 유틸리티
//!
//! GeoJSON 좌표 검증과 구면 거리 계산을 위한 상태 없는 순수 함수들입니다.
//! 좌표 순서는 GeoJSON 규약대로 `[경도, 위도, 고도?]`입니다.

/// 구면 거리 계산에 쓰는 지구 반지름 (미터)
///
/// MongoDB 2dsphere 인덱스의 `$geoNear` 구면 계산과 같은 값입니다.
pub const EARTH_RADIUS_METERS: f64 = 6_378_100.0;

/// 유효한 경도인지 확인 (`[-180, 180]`)
#[inline]
pub fn is_valid_longitude(value: f64) -> bool {
    (-180.0..=180.0).contains(&value)
}

/// 유효한 위도인지 확인 (`[-90, 90]`)
#[inline]
pub fn is_valid_latitude(value: f64) -> bool {
    (-90.0..=90.0).contains(&value)
}

/// 좌표 배열 검증
///
/// 길이가 2 또는 3이고, 첫 번째 값이 유효한 경도, 두 번째 값이 유효한 위도일 때만 true.
/// 세 번째 값(고도)은 검사하지 않습니다. NaN은 범위 검사에서 걸러집니다.
///
/// # 예제
/// ```rust,ignore
/// assert!(validate_coordinates(&[10.0, 45.0]));
/// assert!(!validate_coordinates(&[200.0, 10.0]));
/// ```
pub fn validate_coordinates(value: &[f64]) -> bool {
    matches!(value.len(), 2 | 3) && is_valid_longitude(value[0]) && is_valid_latitude(value[1])
}

/// 두 좌표 사이의 대원 거리 (미터, haversine)
///
/// 인자는 `[경도, 위도, ..]` 형태이며 고도는 무시합니다.
/// 어느 한쪽이라도 [`validate_coordinates`]를 통과하지 못하면 `None`입니다.
pub fn great_circle_distance(from: &[f64], to: &[f64]) -> Option<f64> {
    if !validate_coordinates(from) || !validate_coordinates(to) {
        return None;
    }

    let (lon1, lat1) = (from[0], from[1]);
    let (lon2, lat2) = (to[0], to[1]);

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Some(EARTH_RADIUS_METERS * c)
}
