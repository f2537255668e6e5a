// ============================================================================
// ADMIN SESSION - password -> OTP -> authorized -> (timeout | logout)
// ============================================================================
// Framework independent: the hook feeds one tick per second and activity
// events; this type owns every transition.
// ============================================================================

use crate::error::ValidationError;
use crate::models::PendingUser;

pub const DEFAULT_ADMIN_TIMEOUT_SECS: u32 = 30 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminStage {
    /// Password entry screen
    Unauthenticated,
    /// Password accepted, OTP sent
    OtpPending,
    /// OTP accepted, countdown running
    Authorized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not authorized, nothing counted
    Idle,
    Running(u32),
    /// Countdown hit zero, session was reset
    Expired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    stage: AdminStage,
    password: String,
    timeout_secs: u32,
    remaining_secs: u32,
    pending_users: Vec<PendingUser>,
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_TIMEOUT_SECS)
    }
}

impl AdminSession {
    pub fn new(timeout_secs: u32) -> Self {
        Self {
            stage: AdminStage::Unauthenticated,
            password: String::new(),
            timeout_secs,
            remaining_secs: timeout_secs,
            pending_users: Vec::new(),
        }
    }

    pub fn stage(&self) -> AdminStage {
        self.stage
    }

    pub fn is_authorized(&self) -> bool {
        self.stage == AdminStage::Authorized
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn pending_users(&self) -> &[PendingUser] {
        &self.pending_users
    }

    /// Trimmed password, or a validation error before any call
    pub fn check_password_input(input: &str) -> Result<String, ValidationError> {
        let password = input.trim();
        if password.is_empty() {
            Err(ValidationError::EmptyPassword)
        } else {
            Ok(password.to_string())
        }
    }

    pub fn check_otp_input(input: &str) -> Result<String, ValidationError> {
        let otp = input.trim();
        if otp.is_empty() {
            Err(ValidationError::EmptyOtp)
        } else {
            Ok(otp.to_string())
        }
    }

    /// HTTP 200 from validate-password
    pub fn password_validated(&mut self, password: String) {
        if self.stage != AdminStage::Unauthenticated {
            log::warn!("⚠️ [ADMIN] Password validated in stage {:?}, ignored", self.stage);
            return;
        }
        self.password = password;
        self.stage = AdminStage::OtpPending;
        log::info!("🔑 [ADMIN] Password accepted, waiting for OTP");
    }

    /// HTTP 200 from validate-otp. Returns true when the session became authorized.
    pub fn otp_validated(&mut self) -> bool {
        if self.stage != AdminStage::OtpPending {
            log::warn!("⚠️ [ADMIN] OTP validated in stage {:?}, ignored", self.stage);
            return false;
        }
        self.stage = AdminStage::Authorized;
        self.remaining_secs = self.timeout_secs;
        log::info!("✅ [ADMIN] Authorized for {} seconds", self.timeout_secs);
        true
    }

    /// Pointer, key, scroll or touch activity. Only counts while authorized.
    pub fn record_activity(&mut self) -> bool {
        if !self.is_authorized() {
            return false;
        }
        self.remaining_secs = self.timeout_secs;
        true
    }

    /// One elapsed second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_authorized() {
            return TickOutcome::Idle;
        }
        if self.remaining_secs <= 1 {
            log::warn!("⏰ [ADMIN] Session timed out");
            self.reset();
            return TickOutcome::Expired;
        }
        self.remaining_secs -= 1;
        TickOutcome::Running(self.remaining_secs)
    }

    /// Explicit logout (confirmation happens in the view)
    pub fn logout(&mut self) {
        log::info!("🚪 [ADMIN] Logout");
        self.reset();
    }

    /// Leaves the OTP screen without validating, back to password entry
    pub fn cancel_otp(&mut self) {
        if self.stage == AdminStage::OtpPending {
            self.reset();
        }
    }

    pub fn set_pending_users(&mut self, users: Vec<PendingUser>) {
        if self.is_authorized() {
            self.pending_users = users;
        } else {
            log::warn!("⚠️ [ADMIN] Dropping pending users received while not authorized");
        }
    }

    /// Password to re-send with approve/deny/bulk-approve; authorized only
    pub fn credential(&self) -> Result<&str, ValidationError> {
        if self.is_authorized() {
            Ok(&self.password)
        } else {
            Err(ValidationError::NotAuthorized)
        }
    }

    /// Password sent with the first pending-users fetch (OTP pending or authorized)
    pub fn validated_password(&self) -> Option<&str> {
        match self.stage {
            AdminStage::Unauthenticated => None,
            _ => Some(&self.password),
        }
    }

    fn reset(&mut self) {
        self.stage = AdminStage::Unauthenticated;
        self.password.clear();
        self.pending_users.clear();
        self.remaining_secs = self.timeout_secs;
    }
}

/// Inputs of the admin page state
#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    PasswordValidated(String),
    OtpValidated,
    CancelOtp,
    Activity,
    Tick,
    Logout,
    /// Pending users fetched under `epoch`
    UsersLoaded { epoch: u64, users: Vec<PendingUser> },
}

/// Admin session plus bookkeeping for stale responses and timeout notices
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminState {
    pub session: AdminSession,
    /// Bumped on every reset; responses from an older epoch are dropped
    pub epoch: u64,
    /// Number of timeouts so far, watched by the view to show the notice
    pub expirations: u32,
}

impl AdminState {
    pub fn new(timeout_secs: u32) -> Self {
        Self {
            session: AdminSession::new(timeout_secs),
            epoch: 0,
            expirations: 0,
        }
    }

    pub fn apply(&mut self, action: AdminAction) {
        match action {
            AdminAction::PasswordValidated(password) => self.session.password_validated(password),
            AdminAction::OtpValidated => {
                self.session.otp_validated();
            }
            AdminAction::CancelOtp => {
                self.session.cancel_otp();
                self.epoch += 1;
            }
            AdminAction::Activity => {
                self.session.record_activity();
            }
            AdminAction::Tick => {
                if self.session.tick() == TickOutcome::Expired {
                    self.epoch += 1;
                    self.expirations += 1;
                }
            }
            AdminAction::Logout => {
                self.session.logout();
                self.epoch += 1;
            }
            AdminAction::UsersLoaded { epoch, users } => {
                if epoch == self.epoch {
                    self.session.set_pending_users(users);
                } else {
                    log::warn!("⚠️ [ADMIN] Discarding users fetched before the last reset");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorized() -> AdminSession {
        let mut session = AdminSession::default();
        session.password_validated("s3cret".to_string());
        assert!(session.otp_validated());
        session
    }

    fn run(session: &mut AdminSession, secs: u32) -> TickOutcome {
        let mut last = TickOutcome::Idle;
        for _ in 0..secs {
            last = session.tick();
        }
        last
    }

    fn user(id: i64) -> PendingUser {
        PendingUser {
            id,
            username: format!("user{}@uni.edu", id),
            registration_date: None,
        }
    }

    #[test]
    fn test_transitions_require_order() {
        let mut session = AdminSession::default();
        assert_eq!(session.stage(), AdminStage::Unauthenticated);

        // OTP before password is ignored
        assert!(!session.otp_validated());
        assert_eq!(session.stage(), AdminStage::Unauthenticated);

        session.password_validated("pw".to_string());
        assert_eq!(session.stage(), AdminStage::OtpPending);
        assert_eq!(session.validated_password(), Some("pw"));
        assert_eq!(session.credential(), Err(ValidationError::NotAuthorized));

        assert!(session.otp_validated());
        assert_eq!(session.stage(), AdminStage::Authorized);
        assert_eq!(session.credential(), Ok("pw"));
        assert_eq!(session.remaining_secs(), 1800);
    }

    #[test]
    fn test_expires_after_1800_not_1799() {
        let mut session = authorized();
        assert_eq!(run(&mut session, 1799), TickOutcome::Running(1));
        assert!(session.is_authorized());

        assert_eq!(session.tick(), TickOutcome::Expired);
        assert_eq!(session.stage(), AdminStage::Unauthenticated);
    }

    #[test]
    fn test_activity_at_1000_resets_to_1800() {
        let mut session = authorized();
        run(&mut session, 1000);
        assert_eq!(session.remaining_secs(), 800);

        assert!(session.record_activity());
        assert_eq!(session.remaining_secs(), 1800);

        // The full timeout is needed again from here
        assert_eq!(run(&mut session, 1799), TickOutcome::Running(1));
        assert_eq!(session.tick(), TickOutcome::Expired);
    }

    #[test]
    fn test_otp_then_idle_timeout_clears_everything() {
        let mut session = authorized();
        session.set_pending_users(vec![user(1), user(2)]);
        assert_eq!(session.pending_users().len(), 2);

        assert_eq!(run(&mut session, 1800), TickOutcome::Expired);
        assert_eq!(session.stage(), AdminStage::Unauthenticated);
        assert!(session.pending_users().is_empty());
        assert_eq!(session.validated_password(), None);
        assert_eq!(session.credential(), Err(ValidationError::NotAuthorized));
    }

    #[test]
    fn test_activity_and_ticks_ignored_when_not_authorized() {
        let mut session = AdminSession::default();
        assert!(!session.record_activity());
        assert_eq!(session.tick(), TickOutcome::Idle);

        session.password_validated("pw".to_string());
        assert!(!session.record_activity());
        assert_eq!(run(&mut session, 5000), TickOutcome::Idle);
        assert_eq!(session.stage(), AdminStage::OtpPending);
    }

    #[test]
    fn test_logout_and_reauthorize_restart_countdown() {
        let mut session = authorized();
        session.set_pending_users(vec![user(3)]);
        run(&mut session, 600);

        session.logout();
        assert_eq!(session.stage(), AdminStage::Unauthenticated);
        assert!(session.pending_users().is_empty());

        session.password_validated("pw2".to_string());
        session.otp_validated();
        assert_eq!(session.remaining_secs(), 1800);
        assert_eq!(session.credential(), Ok("pw2"));
    }

    #[test]
    fn test_pending_users_dropped_when_not_authorized() {
        let mut session = AdminSession::default();
        session.set_pending_users(vec![user(1)]);
        assert!(session.pending_users().is_empty());
    }

    #[test]
    fn test_input_validation() {
        assert_eq!(AdminSession::check_password_input("  "), Err(ValidationError::EmptyPassword));
        assert_eq!(AdminSession::check_password_input(" pw "), Ok("pw".to_string()));
        assert_eq!(AdminSession::check_otp_input(""), Err(ValidationError::EmptyOtp));
        assert_eq!(AdminSession::check_otp_input("123456"), Ok("123456".to_string()));
    }

    #[test]
    fn test_custom_timeout() {
        let mut session = AdminSession::new(3);
        session.password_validated("pw".to_string());
        session.otp_validated();
        assert_eq!(run(&mut session, 2), TickOutcome::Running(1));
        assert_eq!(session.tick(), TickOutcome::Expired);
    }

    #[test]
    fn test_cancel_otp() {
        let mut session = AdminSession::default();
        session.password_validated("pw".to_string());
        session.cancel_otp();
        assert_eq!(session.stage(), AdminStage::Unauthenticated);
        assert_eq!(session.validated_password(), None);
    }

    #[test]
    fn test_state_discards_users_from_previous_epoch() {
        let mut state = AdminState::new(1800);
        state.apply(AdminAction::PasswordValidated("pw".to_string()));
        state.apply(AdminAction::OtpValidated);
        let epoch = state.epoch;

        state.apply(AdminAction::Logout);
        state.apply(AdminAction::PasswordValidated("pw".to_string()));
        state.apply(AdminAction::OtpValidated);
        state.apply(AdminAction::UsersLoaded { epoch, users: vec![user(1)] });
        assert!(state.session.pending_users().is_empty());

        state.apply(AdminAction::UsersLoaded { epoch: state.epoch, users: vec![user(2)] });
        assert_eq!(state.session.pending_users()[0].id, 2);
    }

    #[test]
    fn test_state_counts_expirations() {
        let mut state = AdminState::new(2);
        state.apply(AdminAction::PasswordValidated("pw".to_string()));
        state.apply(AdminAction::OtpValidated);
        state.apply(AdminAction::Tick);
        assert_eq!(state.expirations, 0);
        state.apply(AdminAction::Activity);
        state.apply(AdminAction::Tick);
        assert_eq!(state.expirations, 0);
        state.apply(AdminAction::Tick);
        assert_eq!(state.expirations, 1);
        assert_eq!(state.session.stage(), AdminStage::Unauthenticated);
        assert_eq!(state.epoch, 1);
    }
}
