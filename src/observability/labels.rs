use metrics::{IntoLabels, Label, SharedString};

/// Labels attached to every metric emitted by a [crate::FormValidator].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// A copy of these labels followed by `additional_labels`.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(Label::from));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::{Labels, NO_LABEL};
    use metrics::{IntoLabels, Label};

    #[test]
    fn test_clone_with_labels_keeps_original() {
        let app = Labels::new(&[("app", "signup")]);

        let registration = app.clone_with_labels(&[("form", "registration")]);
        let label_list = registration.into_labels();
        assert_eq!(
            label_list,
            vec![
                Label::new("app", "signup"),
                Label::new("form", "registration")
            ]
        );

        let login = app.clone_with_labels(&[("form", "login"), ("reason", "missing_fields")]);
        let label_list = login.into_labels();
        assert!(label_list.contains(&Label::new("app", "signup")));
        assert!(!label_list.contains(&Label::new("form", "registration")));
        assert!(label_list.contains(&Label::new("reason", "missing_fields")));

        assert_eq!(app.into_labels().len(), 1);
    }

    #[test]
    fn test_no_label() {
        assert!(NO_LABEL.clone().into_labels().is_empty());
        assert_eq!(Labels::default(), NO_LABEL);
    }
}
