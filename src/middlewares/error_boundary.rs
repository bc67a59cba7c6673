//! 에러 경계 미들웨어
//!
//! 핸들러가 동기적으로(future 생성 중) 또는 비동기적으로(poll 중) 패닉하거나
//! `AppError`가 아닌 에러로 5xx 응답을 만들면, 원문은 로그로만 남기고
//! `AppError` 응답기를 거친 500 응답을 한 번만 보냅니다.
//!
//! `AppError`는 자신의 분류대로 응답합니다. 프레임워크의 4xx 에러는 그대로 통과합니다.
//!
//! 라우팅은 요청을 단독 소유해야 하므로 `HttpRequest`를 미리 복제하지 않습니다.
//! 패닉처럼 요청이 회수되지 않는 경우에는 `Err(AppError)`를 돌려주고,
//! 디스패처가 같은 응답기로 렌더링합니다. 가장 바깥쪽에 등록합니다.

use std::any::Any;
use std::future::{ready, Ready};
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use crate::errors::errors::AppError;

pub struct ErrorBoundary;

impl<S, B> Transform<S, ServiceRequest> for ErrorBoundary
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ErrorBoundaryService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorBoundaryService {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorBoundaryService<S> {
    service: Rc<S>,
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

impl<S, B> Service<ServiceRequest> for ErrorBoundaryService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // future 생성과 poll을 하나의 catch_unwind로 감쌉니다.
            let outcome = AssertUnwindSafe(async move { service.call(req).await })
                .catch_unwind()
                .await;

            match outcome {
                Ok(Ok(res)) => {
                    let foreign = res
                        .response()
                        .error()
                        .filter(|err| err.as_error::<AppError>().is_none() && res.status().is_server_error())
                        .map(|err| err.to_string());

                    match foreign {
                        Some(detail) => {
                            let (req, _) = res.into_parts();
                            let response = AppError::InternalError(detail).error_response();
                            Ok(ServiceResponse::new(req, response).map_into_right_body())
                        }
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Ok(Err(err)) if err.as_error::<AppError>().is_some() => Err(err),
                Ok(Err(err)) => Err(AppError::InternalError(err.to_string()).into()),
                Err(panic) => Err(AppError::InternalError(format!(
                    "handler panicked: {}",
                    panic_message(panic.as_ref())
                ))
                .into()),
            }
        })
    }
}
