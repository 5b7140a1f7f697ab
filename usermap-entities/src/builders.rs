pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::user_annotation_builder::*;

pub mod user_annotation_builder {

    use super::*;
    use crate::{annotation::*, geo::*};

    #[derive(Debug)]
    pub struct UserAnnotationBuild {
        annotation: UserAnnotation,
    }

    impl UserAnnotationBuild {
        pub fn user_id(mut self, id: i64) -> Self {
            self.annotation.user_id = id.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.annotation.pos = pos;
            self
        }
        pub fn nickname(mut self, nickname: &str) -> Self {
            self.annotation.nickname = nickname.into();
            self
        }
        pub fn skills(mut self, skills: &str) -> Self {
            self.annotation.skills = Some(skills.into());
            self
        }
        pub fn status(mut self, status: &str) -> Self {
            self.annotation.status = Some(status.into());
            self
        }
        pub fn distance_m(mut self, meters: f64) -> Self {
            self.annotation.distance = Some(Distance::from_meters(meters));
            self
        }
        pub fn finish(self) -> UserAnnotation {
            self.annotation
        }
    }

    impl Builder for UserAnnotation {
        type Build = UserAnnotationBuild;
        fn build() -> UserAnnotationBuild {
            UserAnnotationBuild {
                annotation: UserAnnotation {
                    user_id: UserId::default(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    nickname: "".into(),
                    skills: None,
                    status: None,
                    distance: None,
                },
            }
        }
    }
}
