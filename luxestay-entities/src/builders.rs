pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{hotel_builder::*, user_builder::*};

pub mod hotel_builder {

    use super::*;
    use crate::{hotel::*, id::*, price::*};

    #[derive(Debug)]
    pub struct HotelBuild {
        hotel: Hotel,
    }

    impl HotelBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.hotel.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.hotel.name = name.into();
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.hotel.rating = rating;
            self
        }
        pub fn price(mut self, price: &str) -> Self {
            self.hotel.price_per_night = price.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.hotel.address = address.into();
            self
        }
        pub fn maps_url(mut self, url: Option<&str>) -> Self {
            self.hotel.maps_url = url.map(Into::into);
            self
        }
        pub fn review_snippets(mut self, snippets: Vec<impl Into<String>>) -> Self {
            self.hotel.review_snippets = Some(snippets.into_iter().map(Into::into).collect());
            self
        }
        pub fn finish(self) -> Hotel {
            self.hotel
        }
    }

    impl Builder for Hotel {
        type Build = HotelBuild;
        fn build() -> HotelBuild {
            HotelBuild {
                hotel: Hotel {
                    id: Id::from("hotel-0"),
                    name: "".into(),
                    rating: 4.8,
                    price_per_night: Price::from_dollars(300),
                    description: "".into(),
                    address: "".into(),
                    image: "".into(),
                    distance: None,
                    maps_url: None,
                    review_snippets: None,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::user::*;

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: "1700000000000".into(),
                    email: "guest@luxestay.com".into(),
                    name: "guest".into(),
                },
            }
        }
    }

    #[test]
    fn override_defaults() {
        let user = User::build().email("vip@luxestay.com").name("vip").finish();
        assert_eq!(user.email, "vip@luxestay.com");
        assert_eq!(user.name, "vip");
        assert!(user.id.is_valid());
    }
}
