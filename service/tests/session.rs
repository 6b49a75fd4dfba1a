use secrecy::{SecretBox, SecretString};
use service::{
    command::{
        IncrementMessageCount, LogIn, LogOut, Register, ResendOtp,
        SendChatMessage, SubmitListing, UpdateSubscription, VerifyOtp,
    },
    domain::{
        chat,
        city, property,
        user::{self, Charge, Limit, Registration, Tier},
        Property, User,
    },
    infra::{gateway::Mock, storage::Memory, Catalog},
    query::CurrentSession,
    task::Background,
    Command as _, Config, Query as _, Service,
};

fn config() -> Config {
    Config {
        otp_secret: SecretString::from("123456".to_owned()),
    }
}

fn agent() -> property::Agent {
    property::Agent {
        name: user::Name::new("Asha Verma").unwrap(),
        phone: user::Phone::new("+91-9876500000").unwrap(),
        email: user::Email::new("asha.verma@shifly.test").unwrap(),
    }
}

fn property(id: &str) -> Property {
    Property {
        id: id.into(),
        title: property::Title::new("Sunrise Heights 3BHK").unwrap(),
        description: property::Description::new("East-facing apartment")
            .unwrap(),
        price: property::Price::new(7_500_000),
        location: property::Location::new("Sector 62").unwrap(),
        city: city::Name::new("Noida").unwrap(),
        bhk: 3,
        kind: property::Kind::Buy,
        category: property::Category::new("Apartment").unwrap(),
        area: 1450,
        images: Vec::new(),
        amenities: Vec::new(),
        verified: true,
        trending: false,
        agent: agent(),
        coordinates: property::Coordinates {
            latitude: 28.62,
            longitude: 77.37,
        },
    }
}

fn registration() -> Registration {
    Registration {
        first_name: user::Name::new("Asha").unwrap(),
        last_name: user::Name::new("Verma").unwrap(),
        email: user::Email::new("asha.verma@example.test").unwrap(),
        phone: user::Phone::new("+91-9876512345").unwrap(),
        password: SecretBox::new(Box::new(
            user::Password::new("s3cret!").unwrap(),
        )),
        age: user::Age::new(27).unwrap(),
        sex: user::Sex::Female,
        role: user::Role::Buyer,
        terms_accepted: true,
    }
}

fn stored_user(tier: Tier) -> User {
    User {
        id: user::Id::new(),
        first_name: user::Name::new("John").unwrap(),
        last_name: user::Name::new("Doe").unwrap(),
        email: user::Email::new("john.doe@example.test").unwrap(),
        phone: user::Phone::new("+91-9876543210").unwrap(),
        age: user::Age::new(30).unwrap(),
        sex: user::Sex::Male,
        role: user::Role::Both,
        subscription: tier,
        messages_used: 0,
        messages_limit: tier.message_limit(),
    }
}

fn build(storage: Memory) -> (Service<Memory, Mock>, Background) {
    let catalog = Catalog::new(vec![property("prop-1")], Vec::new());
    Service::new(config(), storage, Mock::instant(), catalog)
}

async fn booted(storage: Memory) -> Service<Memory, Mock> {
    let (service, background) = build(storage);
    background.await.unwrap();
    service
}

async fn logged_in(storage: Memory) -> Service<Memory, Mock> {
    let service = booted(storage).await;
    _ = service
        .execute(LogIn {
            email: "john.doe@example.test".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap();
    service
}

#[tokio::test]
async fn starts_restoring_and_settles_anonymous() {
    let (service, background) = build(Memory::new());

    let snapshot = service.execute(CurrentSession).await.unwrap();
    assert!(snapshot.restoring);
    assert!(!snapshot.is_authenticated());

    background.await.unwrap();

    let snapshot = service.execute(CurrentSession).await.unwrap();
    assert!(!snapshot.restoring);
    assert!(!snapshot.is_authenticated());
}

#[tokio::test]
async fn restores_stored_user_on_startup() {
    let stored = stored_user(Tier::Basic);
    let email = stored.email.clone();
    let service = booted(Memory::with(stored)).await;

    let snapshot = service.execute(CurrentSession).await.unwrap();
    assert!(!snapshot.restoring);
    let user = snapshot.user.expect("restored");
    assert_eq!(user.email, email);
    assert_eq!(user.subscription, Tier::Basic);
    assert_eq!(user.messages_limit, Limit::Limited(50));
}

#[tokio::test]
async fn login_rejects_empty_credentials() {
    let storage = Memory::new();
    let service = booted(storage.clone()).await;

    let missing_email = service
        .execute(LogIn {
            email: String::new(),
            password: "hunter2".into(),
        })
        .await;
    assert!(missing_email.is_err());

    let missing_password = service
        .execute(LogIn {
            email: "john.doe@example.test".into(),
            password: String::new(),
        })
        .await;
    assert!(missing_password.is_err());

    assert!(storage.stored().is_none());
    let snapshot = service.execute(CurrentSession).await.unwrap();
    assert!(!snapshot.is_authenticated());
}

#[tokio::test]
async fn login_creates_and_persists_free_tier_user() {
    let storage = Memory::new();
    let service = booted(storage.clone()).await;

    let user = service
        .execute(LogIn {
            email: "john.doe@example.test".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap();

    assert_eq!(user.email.to_string(), "john.doe@example.test");
    assert_eq!(user.subscription, Tier::Free);
    assert_eq!(user.messages_used, 0);
    assert_eq!(user.messages_limit, Limit::Limited(5));

    let stored = storage.stored().expect("persisted");
    assert_eq!(stored.id, user.id);
    assert_eq!(stored.subscription, Tier::Free);

    let snapshot = service.execute(CurrentSession).await.unwrap();
    assert!(snapshot.is_authenticated());
}

#[tokio::test]
async fn registration_confirms_with_the_right_otp_only() {
    let storage = Memory::new();
    let service = booted(storage.clone()).await;
    let submitted = registration();

    service
        .execute(Register {
            registration: submitted.clone(),
        })
        .await
        .unwrap();

    // No user exists until the OTP is confirmed.
    assert!(storage.stored().is_none());

    let wrong = service.execute(VerifyOtp { code: "000000".into() }).await;
    assert!(wrong.is_err());

    // The pending registration survives a wrong code for a retry.
    let user = service
        .execute(VerifyOtp { code: "123456".into() })
        .await
        .unwrap();

    assert_eq!(user.first_name, submitted.first_name);
    assert_eq!(user.last_name, submitted.last_name);
    assert_eq!(user.email, submitted.email);
    assert_eq!(user.phone, submitted.phone);
    assert_eq!(user.subscription, Tier::Free);
    assert_eq!(user.messages_limit, Limit::Limited(5));

    let stored = storage.stored().expect("persisted");
    assert_eq!(stored.id, user.id);

    // The pending registration is gone after a success.
    let again = service.execute(VerifyOtp { code: "123456".into() }).await;
    assert!(again.is_err());
}

#[tokio::test]
async fn registration_requires_accepted_terms() {
    let service = booted(Memory::new()).await;
    let mut submitted = registration();
    submitted.terms_accepted = false;

    let result = service
        .execute(Register {
            registration: submitted,
        })
        .await;
    assert!(result.is_err());

    // Nothing is pending, so nothing can be confirmed.
    let verify = service.execute(VerifyOtp { code: "123456".into() }).await;
    assert!(verify.is_err());
}

#[tokio::test]
async fn otp_resend_requires_a_pending_registration() {
    let service = booted(Memory::new()).await;

    assert!(service.execute(ResendOtp).await.is_err());

    service
        .execute(Register {
            registration: registration(),
        })
        .await
        .unwrap();

    service.execute(ResendOtp).await.unwrap();
}

#[tokio::test]
async fn logout_clears_session_and_slot() {
    let storage = Memory::new();
    let service = logged_in(storage.clone()).await;
    assert!(storage.stored().is_some());

    service.execute(LogOut).await.unwrap();

    assert!(storage.stored().is_none());
    let snapshot = service.execute(CurrentSession).await.unwrap();
    assert!(!snapshot.is_authenticated());

    // A restart after logout comes up anonymous.
    let restarted = booted(storage).await;
    let snapshot = restarted.execute(CurrentSession).await.unwrap();
    assert!(!snapshot.is_authenticated());
}

#[tokio::test]
async fn subscription_upgrade_follows_the_quota_table() {
    for (tier, limit) in [
        (Tier::Basic, Limit::Limited(50)),
        (Tier::Pro, Limit::Unlimited),
        (Tier::Enterprise, Limit::Unlimited),
    ] {
        let storage = Memory::new();
        let service = logged_in(storage.clone()).await;

        // Spend part of the free quota first to observe the reset.
        _ = service.execute(IncrementMessageCount).await.unwrap();

        let user = service.execute(UpdateSubscription { tier }).await.unwrap();
        assert_eq!(user.subscription, tier);
        assert_eq!(user.messages_used, 0);
        assert_eq!(user.messages_limit, limit);

        let stored = storage.stored().expect("persisted");
        assert_eq!(stored.subscription, tier);
        assert_eq!(stored.messages_used, 0);
        assert_eq!(stored.messages_limit, limit);
    }
}

#[tokio::test]
async fn subscription_rejects_the_free_tier_and_anonymous_callers() {
    let service = booted(Memory::new()).await;
    let anonymous = service
        .execute(UpdateSubscription { tier: Tier::Basic })
        .await;
    assert!(anonymous.is_err());

    let service = logged_in(Memory::new()).await;
    let free = service
        .execute(UpdateSubscription { tier: Tier::Free })
        .await;
    assert!(free.is_err());
}

#[tokio::test]
async fn free_tier_quota_allows_exactly_five_messages() {
    let storage = Memory::new();
    let service = logged_in(storage.clone()).await;

    for _ in 0..5 {
        let charge = service.execute(IncrementMessageCount).await.unwrap();
        assert_eq!(charge, Charge::Charged);
    }

    let charge = service.execute(IncrementMessageCount).await.unwrap();
    assert_eq!(charge, Charge::Exhausted);

    let stored = storage.stored().expect("persisted");
    assert_eq!(stored.messages_used, 5);
}

#[tokio::test]
async fn unlimited_tier_is_never_charged() {
    let storage = Memory::new();
    let service = logged_in(storage.clone()).await;
    _ = service
        .execute(UpdateSubscription { tier: Tier::Pro })
        .await
        .unwrap();

    for _ in 0..60 {
        let charge = service.execute(IncrementMessageCount).await.unwrap();
        assert_eq!(charge, Charge::Unlimited);
    }

    let stored = storage.stored().expect("persisted");
    assert_eq!(stored.messages_used, 0);
}

#[tokio::test]
async fn message_charge_requires_authentication() {
    let service = booted(Memory::new()).await;
    assert!(service.execute(IncrementMessageCount).await.is_err());
}

#[tokio::test]
async fn chat_returns_an_agent_reply_and_charges_the_quota() {
    let storage = Memory::new();
    let service = logged_in(storage.clone()).await;

    let output = service
        .execute(SendChatMessage {
            property_id: "prop-1".into(),
            text: chat::Text::new("Is this still available?").unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(output.sent.author, chat::Author::User);
    assert_eq!(output.reply.author, chat::Author::Agent);
    assert!(!output.reply.text.to_string().is_empty());

    let stored = storage.stored().expect("persisted");
    assert_eq!(stored.messages_used, 1);
}

#[tokio::test]
async fn chat_blocks_when_the_quota_is_exhausted() {
    let storage = Memory::new();
    let service = logged_in(storage.clone()).await;

    for _ in 0..5 {
        _ = service
            .execute(SendChatMessage {
                property_id: "prop-1".into(),
                text: chat::Text::new("Hello!").unwrap(),
            })
            .await
            .unwrap();
    }

    let blocked = service
        .execute(SendChatMessage {
            property_id: "prop-1".into(),
            text: chat::Text::new("One more?").unwrap(),
        })
        .await;
    assert!(blocked.is_err());

    let stored = storage.stored().expect("persisted");
    assert_eq!(stored.messages_used, 5);
}

#[tokio::test]
async fn chat_requires_a_known_property() {
    let service = logged_in(Memory::new()).await;

    let unknown = service
        .execute(SendChatMessage {
            property_id: "prop-404".into(),
            text: chat::Text::new("Anyone there?").unwrap(),
        })
        .await;
    assert!(unknown.is_err());
}

#[tokio::test]
async fn listing_submission_requires_authentication() {
    let submit = SubmitListing {
        title: property::Title::new("Riverside 2BHK").unwrap(),
        description: None,
        price: property::Price::new(5_400_000),
        location: property::Location::new("Sector 18").unwrap(),
        city: city::Name::new("Noida").unwrap(),
        bhk: 2,
        kind: property::Kind::Buy,
        category: Some(property::Category::new("Apartment").unwrap()),
        area: Some(980),
    };

    let service = booted(Memory::new()).await;
    assert!(service.execute(submit.clone()).await.is_err());

    let service = logged_in(Memory::new()).await;
    let draft = service.execute(submit).await.unwrap();
    assert_eq!(draft.title.to_string(), "Riverside 2BHK");
    assert_eq!(draft.price, property::Price::new(5_400_000));
    assert_eq!(draft.bhk, 2);
}
