use crate::config::{ConfigError, FormRules};
use crate::forms::metrics::FormMetrics;
use crate::forms::{FormError, FormKind, LoginForm, PasswordRecoveryForm, RegistrationForm};
use crate::observability::labels::Labels;

/// Checks submitted forms against a set of [FormRules] and counts the outcome.
///
/// Emits `forms.checked` for every check and `forms.rejected` (with a
/// `reason` label) for every failure, both labelled with the `form` name.
pub struct FormValidator {
    rules: FormRules,
    registration: FormMetrics,
    login: FormMetrics,
    password_recovery: FormMetrics,
}

impl FormValidator {
    pub fn builder() -> FormValidatorBuilder {
        FormValidatorBuilder::default()
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    pub fn check_registration(&self, form: &RegistrationForm) -> Result<(), FormError> {
        let result = form.validate(&self.rules);
        self.registration.record(&result);
        result
    }

    pub fn check_login(&self, form: &LoginForm) -> Result<(), FormError> {
        let result = form.validate(&self.rules);
        self.login.record(&result);
        result
    }

    pub fn check_password_recovery(&self, form: &PasswordRecoveryForm) -> Result<(), FormError> {
        let result = form.validate();
        self.password_recovery.record(&result);
        result
    }
}

#[derive(Default)]
pub struct FormValidatorBuilder {
    rules: FormRules,
    labels: Labels,
}

impl FormValidatorBuilder {
    pub fn rules(mut self, rules: FormRules) -> Self {
        self.rules = rules;
        self
    }

    /// Labels added to every metric, before `form` and `reason`.
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> Result<FormValidator, ConfigError> {
        self.rules.validate()?;
        Ok(FormValidator {
            registration: FormMetrics::new(&self.labels, FormKind::Registration),
            login: FormMetrics::new(&self.labels, FormKind::Login),
            password_recovery: FormMetrics::new(&self.labels, FormKind::PasswordRecovery),
            rules: self.rules,
        })
    }
}
