use crate::middlewares::v1::auth::Principal;
use crate::responses::v1::user::User;

/// The caller's own record, exactly as stored
#[::tracing::instrument(skip(principal), fields(user_id = principal.user.id, token_id = principal.token.id))]
pub fn current(principal: Principal) -> User {
    ::tracing::debug!("Returning authenticated user information");

    principal.user.into()
}
