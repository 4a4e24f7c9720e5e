use crate::forms::{FormError, FormKind};
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

const FORM: &str = "form";
const REASON: &str = "reason";

pub(crate) struct FormMetrics {
    checked: Counter,
    labels: Labels,
}

impl FormMetrics {
    pub(crate) fn new(labels: &Labels, form: FormKind) -> Self {
        let form: &'static str = form.into();
        let labels = labels.clone_with_labels(&[(FORM, form)]);
        FormMetrics {
            checked: counter!("forms.checked", labels.clone()),
            labels,
        }
    }

    pub(crate) fn record(&self, result: &Result<(), FormError>) {
        self.checked.increment(1);
        if let Err(error) = result {
            counter!(
                "forms.rejected",
                self.labels.clone_with_labels(&[(REASON, error.reason())])
            )
            .increment(1);
        }
    }
}
