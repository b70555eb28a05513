use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse, User};

/// Plain equality against the seeded accounts. No session is issued; callers
/// resend credentials on every request.
pub fn login(users: &[User], req: &LoginRequest) -> Result<LoginResponse, AppError> {
    let (Some(email), Some(password)) = (req.email(), req.password()) else {
        return Err(AppError::InvalidCredentials);
    };

    let user = users
        .iter()
        .find(|u| u.email == email && u.password == password)
        .ok_or(AppError::InvalidCredentials)?;

    Ok(LoginResponse {
        id: user.id,
        email: email.to_string(),
        role: user.role,
    })
}
