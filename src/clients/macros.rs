/// Generates a client method that sends a request, waits on the oneshot
/// reply and maps channel failures to [`InventoryError::ServiceUnavailable`].
///
/// [`InventoryError::ServiceUnavailable`]: crate::error::InventoryError::ServiceUnavailable
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::error::InventoryError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|e| $crate::error::InventoryError::ServiceUnavailable(e.to_string()))?;

                response
                    .await
                    .map_err(|e| $crate::error::InventoryError::ServiceUnavailable(e.to_string()))?
            }
        }
    };
}
