use async_trait::async_trait;
use hearth_core::upstream::ReservationClient;
use hearth_core::CoreResult;
use hearth_shared::{Hotel, HotelPage, Reservation, USER_HEADER};
use uuid::Uuid;

use super::UpstreamHttp;

pub struct HttpReservationClient {
    http: UpstreamHttp,
}

impl HttpReservationClient {
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            http: UpstreamHttp::new("reservation", base_url, client),
        }
    }
}

#[async_trait]
impl ReservationClient for HttpReservationClient {
    async fn list_hotels(&self, page: i64, size: i64) -> CoreResult<HotelPage> {
        let request = self
            .http
            .client()
            .get(self.http.url("/hotels"))
            .query(&[("page", page), ("size", size)]);
        let response = self.http.send(request, "hotel page").await?;
        self.http.decode(response, "hotel page").await
    }

    async fn get_hotel_by_id(&self, id: i32) -> CoreResult<Hotel> {
        let what = format!("hotel with id {}", id);
        let request = self.http.client().get(self.http.url(&format!("/hotels/id/{}", id)));
        let response = self.http.send(request, &what).await?;
        self.http.decode(response, &what).await
    }

    async fn get_hotel_by_uid(&self, uid: Uuid) -> CoreResult<Hotel> {
        let what = format!("hotel {}", uid);
        let request = self.http.client().get(self.http.url(&format!("/hotels/{}", uid)));
        let response = self.http.send(request, &what).await?;
        self.http.decode(response, &what).await
    }

    async fn list_reservations(&self, username: &str) -> CoreResult<Vec<Reservation>> {
        let request = self
            .http
            .client()
            .get(self.http.url("/reservations"))
            .header(USER_HEADER, username);
        match self.http.send(request, "reservations").await {
            Ok(response) => self.http.decode(response, "reservations").await,
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    async fn get_reservation(&self, uid: Uuid) -> CoreResult<Reservation> {
        let what = format!("reservation {}", uid);
        let request = self.http.client().get(self.http.url(&format!("/reservations/{}", uid)));
        let response = self.http.send(request, &what).await?;
        self.http.decode(response, &what).await
    }

    async fn create_reservation(&self, reservation: &Reservation) -> CoreResult<Reservation> {
        let request = self
            .http
            .client()
            .post(self.http.url("/reservations"))
            .header(USER_HEADER, reservation.username.as_str())
            .json(reservation);
        let response = self.http.send(request, "new reservation").await?;
        self.http.decode(response, "new reservation").await
    }

    async fn update_reservation(&self, reservation: &Reservation) -> CoreResult<()> {
        let what = format!("reservation {}", reservation.uid);
        let request = self
            .http
            .client()
            .put(self.http.url(&format!("/reservations/{}", reservation.uid)))
            .json(reservation);
        self.http.send(request, &what).await?;
        Ok(())
    }
}
