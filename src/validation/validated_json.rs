//! 검증 게이트를 통과한 JSON 본문 추출기

use std::ops::Deref;
use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use crate::validation::rules::{ValidationGate, ValidationRules};

/// `web::Json<T>`을 읽은 뒤 `T`의 규칙을 평가하는 추출기
///
/// 규칙 위반 시 핸들러 본문은 실행되지 않고 `ValidationError` 응답이 나갑니다.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + ValidationRules + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let value = json.await?.into_inner();
            ValidationGate::check(&value)?;
            Ok(ValidatedJson(value))
        })
    }
}
