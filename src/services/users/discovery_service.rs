//! # 사용자 탐색 서비스
//!
//! 나이 범위 검색과 거리 기반 근접 검색을 제공합니다.
//! 두 연산 모두 읽기 전용이며, 호출할 때마다 쿼리를 새로 실행하는 스트림을 반환합니다.
//!
//! ## 나이 범위 → 생년월일 범위
//!
//! ```text
//! min_birthdate = date(today.year - max_age - 1, today.month, today.day)
//! max_birthdate = date(today.year - min_age,     today.month, today.day)
//!
//! min_birthdate <= birthdate <= max_birthdate   (양 끝 포함)
//! ```
//!
//! 하한은 `max_age + 1`년을 빼므로 최대 나이 경계에서 약 1년을 더 포함합니다.
//! 기존 동작과의 호환을 위해 이 창을 그대로 유지합니다.

use std::sync::Arc;
use chrono::{Datelike, Days, NaiveDate};
use crate::{
    domain::entities::users::GeoPoint,
    errors::{AppError, AppResult},
    repositories::users::{NearbyUserStream, UserStore, UserStream},
};

/// 나이 범위에 해당하는 생년월일 창 `[min, max]`을 계산합니다.
///
/// 기준일이 2월 29일이고 대상 연도가 평년이면 3월 1일로 넘어갑니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 계산된 연도가 표현 범위를 벗어난 경우
pub fn birthdate_window(min_age: u32, max_age: u32, today: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
    let min_birthdate = years_before(today, i64::from(max_age) + 1)?;
    let max_birthdate = years_before(today, i64::from(min_age))?;
    Ok((min_birthdate, max_birthdate))
}

fn years_before(today: NaiveDate, years: i64) -> AppResult<NaiveDate> {
    let out_of_range = || AppError::ValidationError(format!("나이 {}는 허용 범위를 벗어났습니다", years));

    let year = i32::try_from(i64::from(today.year()) - years).map_err(|_| out_of_range())?;

    // 존재하지 않는 날짜는 다음 달로 넘깁니다 (2월 29일 → 3월 1일)
    NaiveDate::from_ymd_opt(year, today.month(), 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(today.day() - 1))))
        .ok_or_else(out_of_range)
}

/// 나이/거리 기반 사용자 탐색 서비스
///
/// ```rust,ignore
/// let discovery = DiscoveryService::new(store.clone());
///
/// let mut nearby = discovery.find_by_distance(&[2.35, 48.85], 10.0).await?;
/// while let Some(user) = nearby.try_next().await? {
///     println!("{} - {:.0}m", user.email, user.distance);
/// }
/// ```
pub struct DiscoveryService {
    store: Arc<dyn UserStore>,
}

impl DiscoveryService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// `today` 기준 나이가 `[min_age, max_age]` 범위인 사용자
    pub async fn find_by_age_range(&self, min_age: u32, max_age: u32, today: NaiveDate) -> AppResult<UserStream> {
        let (min_birthdate, max_birthdate) = birthdate_window(min_age, max_age, today)?;
        log::debug!("나이 범위 검색: {}-{}세 → {} ~ {}", min_age, max_age, min_birthdate, max_birthdate);

        self.store.find_by_birthdate_range(min_birthdate, max_birthdate).await
    }

    /// `origin`에서 `max_distance_km` 이내의 사용자를 가까운 순으로 반환합니다.
    ///
    /// 결과에는 id, email, name, birthdate, distance(미터)만 포함됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 원점 좌표가 잘못되었거나 거리가 음수/NaN
    pub async fn find_by_distance(&self, origin: &[f64], max_distance_km: f64) -> AppResult<NearbyUserStream> {
        let origin = GeoPoint::new(origin.to_vec())?;

        if !max_distance_km.is_finite() || max_distance_km < 0.0 {
            return Err(AppError::ValidationError(format!(
                "검색 거리는 0 이상이어야 합니다: {}", max_distance_km
            )));
        }

        let max_distance_meters = max_distance_km * 1000.0;
        log::debug!(
            "근접 검색: origin=[{}, {}] radius={}m",
            origin.longitude(), origin.latitude(), max_distance_meters
        );

        self.store.find_near(&origin, max_distance_meters).await
    }
}
