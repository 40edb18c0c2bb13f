//! Protobuf messages and tonic service glue for the gRPC surface.
//!
//! These modules are maintained by hand in the exact shape `tonic-build`
//! emits, so the wire contract (service paths, field tags) matches the
//! published service definitions without requiring `protoc` at build time.
//! `coredns.dns.DnsService/Query` is the method the CoreDNS `grpc` plugin
//! forwards to; its path must not change.

/// `switchback.v1` — admin and data-plane service.
pub mod switchback {
    pub mod v1 {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResolveRequest {
            #[prost(string, tag = "1")]
            pub name: ::prost::alloc::string::String,
            /// Record type name, case-insensitive; unknown types fall back to A.
            #[prost(string, tag = "2")]
            pub r#type: ::prost::alloc::string::String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct DnsRecord {
            #[prost(string, tag = "1")]
            pub name: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub r#type: ::prost::alloc::string::String,
            #[prost(uint32, tag = "3")]
            pub ttl: u32,
            #[prost(string, tag = "4")]
            pub value: ::prost::alloc::string::String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResolveResponse {
            #[prost(message, repeated, tag = "1")]
            pub records: ::prost::alloc::vec::Vec<DnsRecord>,
            #[prost(string, tag = "2")]
            pub resolver_used: ::prost::alloc::string::String,
            #[prost(bool, tag = "3")]
            pub request_matched: bool,
            #[prost(bool, tag = "4")]
            pub cname_matched: bool,
            #[prost(string, tag = "5")]
            pub matched_pattern: ::prost::alloc::string::String,
            #[prost(string, tag = "6")]
            pub cname_pattern: ::prost::alloc::string::String,
            #[prost(string, tag = "7")]
            pub rcode: ::prost::alloc::string::String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct GetConfigRequest {}

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct GetConfigResponse {
            #[prost(string, repeated, tag = "1")]
            pub request_patterns: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
            #[prost(string, repeated, tag = "2")]
            pub cname_patterns: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
            #[prost(string, tag = "3")]
            pub request_resolver: ::prost::alloc::string::String,
            #[prost(string, tag = "4")]
            pub explicit_resolver: ::prost::alloc::string::String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct UpdatePatternsRequest {
            #[prost(string, repeated, tag = "1")]
            pub patterns: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct UpdatePatternsResponse {
            #[prost(bool, tag = "1")]
            pub success: bool,
            #[prost(string, tag = "2")]
            pub error: ::prost::alloc::string::String,
            /// The live pattern list after the call, whether it changed or not.
            #[prost(string, repeated, tag = "3")]
            pub patterns: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct GetStatsRequest {}

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct GetStatsResponse {
            #[prost(uint64, tag = "1")]
            pub total_requests: u64,
            #[prost(uint64, tag = "2")]
            pub uptime_seconds: u64,
            #[prost(map = "string, uint64", tag = "3")]
            pub requests_by_resolver: ::std::collections::HashMap<::prost::alloc::string::String, u64>,
            #[prost(map = "string, uint64", tag = "4")]
            pub pattern_matches: ::std::collections::HashMap<::prost::alloc::string::String, u64>,
            #[prost(map = "string, uint64", tag = "5")]
            pub cname_matches: ::std::collections::HashMap<::prost::alloc::string::String, u64>,
        }

        /// Generated client implementations.
        pub mod switchback_service_client {
            #![allow(unused_variables, dead_code, missing_docs, clippy::wildcard_imports)]
            use tonic::codegen::http::Uri;
            use tonic::codegen::*;

            #[derive(Debug, Clone)]
            pub struct SwitchbackServiceClient<T> {
                inner: tonic::client::Grpc<T>,
            }

            impl SwitchbackServiceClient<tonic::transport::Channel> {
                /// Attempt to create a new client by connecting to a given endpoint.
                pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
                where
                    D: TryInto<tonic::transport::Endpoint>,
                    D::Error: Into<StdError>,
                {
                    let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
                    Ok(Self::new(conn))
                }
            }

            impl<T> SwitchbackServiceClient<T>
            where
                T: tonic::client::GrpcService<tonic::body::BoxBody>,
                T::Error: Into<StdError>,
                T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
                <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
            {
                pub fn new(inner: T) -> Self {
                    let inner = tonic::client::Grpc::new(inner);
                    Self { inner }
                }

                pub fn with_origin(inner: T, origin: Uri) -> Self {
                    let inner = tonic::client::Grpc::with_origin(inner, origin);
                    Self { inner }
                }

                /// Compress requests with the given encoding.
                #[must_use]
                pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
                    self.inner = self.inner.send_compressed(encoding);
                    self
                }

                /// Enable decompressing responses.
                #[must_use]
                pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
                    self.inner = self.inner.accept_compressed(encoding);
                    self
                }

                /// Limits the maximum size of a decoded message.
                #[must_use]
                pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
                    self.inner = self.inner.max_decoding_message_size(limit);
                    self
                }

                /// Limits the maximum size of an encoded message.
                #[must_use]
                pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
                    self.inner = self.inner.max_encoding_message_size(limit);
                    self
                }

                pub async fn resolve(
                    &mut self,
                    request: impl tonic::IntoRequest<super::ResolveRequest>,
                ) -> std::result::Result<tonic::Response<super::ResolveResponse>, tonic::Status>
                {
                    self.inner.ready().await.map_err(|e| {
                        tonic::Status::new(
                            tonic::Code::Unknown,
                            format!("Service was not ready: {}", e.into()),
                        )
                    })?;
                    let codec = tonic::codec::ProstCodec::default();
                    let path = http::uri::PathAndQuery::from_static(
                        "/switchback.v1.SwitchbackService/Resolve",
                    );
                    let mut req = request.into_request();
                    req.extensions_mut().insert(GrpcMethod::new(
                        "switchback.v1.SwitchbackService",
                        "Resolve",
                    ));
                    self.inner.unary(req, path, codec).await
                }

                pub async fn get_config(
                    &mut self,
                    request: impl tonic::IntoRequest<super::GetConfigRequest>,
                ) -> std::result::Result<tonic::Response<super::GetConfigResponse>, tonic::Status>
                {
                    self.inner.ready().await.map_err(|e| {
                        tonic::Status::new(
                            tonic::Code::Unknown,
                            format!("Service was not ready: {}", e.into()),
                        )
                    })?;
                    let codec = tonic::codec::ProstCodec::default();
                    let path = http::uri::PathAndQuery::from_static(
                        "/switchback.v1.SwitchbackService/GetConfig",
                    );
                    let mut req = request.into_request();
                    req.extensions_mut().insert(GrpcMethod::new(
                        "switchback.v1.SwitchbackService",
                        "GetConfig",
                    ));
                    self.inner.unary(req, path, codec).await
                }

                pub async fn update_request_patterns(
                    &mut self,
                    request: impl tonic::IntoRequest<super::UpdatePatternsRequest>,
                ) -> std::result::Result<tonic::Response<super::UpdatePatternsResponse>, tonic::Status>
                {
                    self.inner.ready().await.map_err(|e| {
                        tonic::Status::new(
                            tonic::Code::Unknown,
                            format!("Service was not ready: {}", e.into()),
                        )
                    })?;
                    let codec = tonic::codec::ProstCodec::default();
                    let path = http::uri::PathAndQuery::from_static(
                        "/switchback.v1.SwitchbackService/UpdateRequestPatterns",
                    );
                    let mut req = request.into_request();
                    req.extensions_mut().insert(GrpcMethod::new(
                        "switchback.v1.SwitchbackService",
                        "UpdateRequestPatterns",
                    ));
                    self.inner.unary(req, path, codec).await
                }

                pub async fn update_cname_patterns(
                    &mut self,
                    request: impl tonic::IntoRequest<super::UpdatePatternsRequest>,
                ) -> std::result::Result<tonic::Response<super::UpdatePatternsResponse>, tonic::Status>
                {
                    self.inner.ready().await.map_err(|e| {
                        tonic::Status::new(
                            tonic::Code::Unknown,
                            format!("Service was not ready: {}", e.into()),
                        )
                    })?;
                    let codec = tonic::codec::ProstCodec::default();
                    let path = http::uri::PathAndQuery::from_static(
                        "/switchback.v1.SwitchbackService/UpdateCnamePatterns",
                    );
                    let mut req = request.into_request();
                    req.extensions_mut().insert(GrpcMethod::new(
                        "switchback.v1.SwitchbackService",
                        "UpdateCnamePatterns",
                    ));
                    self.inner.unary(req, path, codec).await
                }

                pub async fn get_stats(
                    &mut self,
                    request: impl tonic::IntoRequest<super::GetStatsRequest>,
                ) -> std::result::Result<tonic::Response<super::GetStatsResponse>, tonic::Status>
                {
                    self.inner.ready().await.map_err(|e| {
                        tonic::Status::new(
                            tonic::Code::Unknown,
                            format!("Service was not ready: {}", e.into()),
                        )
                    })?;
                    let codec = tonic::codec::ProstCodec::default();
                    let path = http::uri::PathAndQuery::from_static(
                        "/switchback.v1.SwitchbackService/GetStats",
                    );
                    let mut req = request.into_request();
                    req.extensions_mut().insert(GrpcMethod::new(
                        "switchback.v1.SwitchbackService",
                        "GetStats",
                    ));
                    self.inner.unary(req, path, codec).await
                }
            }
        }

        /// Generated server implementations.
        pub mod switchback_service_server {
            #![allow(unused_variables, dead_code, missing_docs, clippy::wildcard_imports)]
            use tonic::codegen::*;

            /// Generated trait containing gRPC methods that should be
            /// implemented for use with SwitchbackServiceServer.
            #[async_trait]
            pub trait SwitchbackService: std::marker::Send + std::marker::Sync + 'static {
                async fn resolve(
                    &self,
                    request: tonic::Request<super::ResolveRequest>,
                ) -> std::result::Result<tonic::Response<super::ResolveResponse>, tonic::Status>;

                async fn get_config(
                    &self,
                    request: tonic::Request<super::GetConfigRequest>,
                ) -> std::result::Result<tonic::Response<super::GetConfigResponse>, tonic::Status>;

                async fn update_request_patterns(
                    &self,
                    request: tonic::Request<super::UpdatePatternsRequest>,
                ) -> std::result::Result<tonic::Response<super::UpdatePatternsResponse>, tonic::Status>;

                async fn update_cname_patterns(
                    &self,
                    request: tonic::Request<super::UpdatePatternsRequest>,
                ) -> std::result::Result<tonic::Response<super::UpdatePatternsResponse>, tonic::Status>;

                async fn get_stats(
                    &self,
                    request: tonic::Request<super::GetStatsRequest>,
                ) -> std::result::Result<tonic::Response<super::GetStatsResponse>, tonic::Status>;
            }

            #[derive(Debug)]
            pub struct SwitchbackServiceServer<T> {
                inner: Arc<T>,
                accept_compression_encodings: EnabledCompressionEncodings,
                send_compression_encodings: EnabledCompressionEncodings,
                max_decoding_message_size: Option<usize>,
                max_encoding_message_size: Option<usize>,
            }

            impl<T> SwitchbackServiceServer<T> {
                pub fn new(inner: T) -> Self {
                    Self::from_arc(Arc::new(inner))
                }

                pub fn from_arc(inner: Arc<T>) -> Self {
                    Self {
                        inner,
                        accept_compression_encodings: Default::default(),
                        send_compression_encodings: Default::default(),
                        max_decoding_message_size: None,
                        max_encoding_message_size: None,
                    }
                }

                pub fn with_interceptor<F>(
                    inner: T,
                    interceptor: F,
                ) -> InterceptedService<Self, F>
                where
                    F: tonic::service::Interceptor,
                {
                    InterceptedService::new(Self::new(inner), interceptor)
                }

                /// Enable decompressing requests with the given encoding.
                #[must_use]
                pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
                    self.accept_compression_encodings.enable(encoding);
                    self
                }

                /// Compress responses with the given encoding, if the client supports it.
                #[must_use]
                pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
                    self.send_compression_encodings.enable(encoding);
                    self
                }

                /// Limits the maximum size of a decoded message.
                #[must_use]
                pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
                    self.max_decoding_message_size = Some(limit);
                    self
                }

                /// Limits the maximum size of an encoded message.
                #[must_use]
                pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
                    self.max_encoding_message_size = Some(limit);
                    self
                }
            }

            impl<T, B> tonic::codegen::Service<http::Request<B>> for SwitchbackServiceServer<T>
            where
                T: SwitchbackService,
                B: Body + std::marker::Send + 'static,
                B::Error: Into<StdError> + std::marker::Send + 'static,
            {
                type Response = http::Response<tonic::body::BoxBody>;
                type Error = std::convert::Infallible;
                type Future = BoxFuture<Self::Response, Self::Error>;

                fn poll_ready(
                    &mut self,
                    _cx: &mut Context<'_>,
                ) -> Poll<std::result::Result<(), Self::Error>> {
                    Poll::Ready(Ok(()))
                }

                fn call(&mut self, req: http::Request<B>) -> Self::Future {
                    match req.uri().path() {
                        "/switchback.v1.SwitchbackService/Resolve" => {
                            #[allow(non_camel_case_types)]
                            struct ResolveSvc<T: SwitchbackService>(pub Arc<T>);
                            impl<T: SwitchbackService>
                                tonic::server::UnaryService<super::ResolveRequest> for ResolveSvc<T>
                            {
                                type Response = super::ResolveResponse;
                                type Future =
                                    BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                                fn call(
                                    &mut self,
                                    request: tonic::Request<super::ResolveRequest>,
                                ) -> Self::Future {
                                    let inner = Arc::clone(&self.0);
                                    let fut = async move {
                                        <T as SwitchbackService>::resolve(&inner, request).await
                                    };
                                    Box::pin(fut)
                                }
                            }
                            let accept_compression_encodings = self.accept_compression_encodings;
                            let send_compression_encodings = self.send_compression_encodings;
                            let max_decoding_message_size = self.max_decoding_message_size;
                            let max_encoding_message_size = self.max_encoding_message_size;
                            let inner = self.inner.clone();
                            let fut = async move {
                                let method = ResolveSvc(inner);
                                let codec = tonic::codec::ProstCodec::default();
                                let mut grpc = tonic::server::Grpc::new(codec)
                                    .apply_compression_config(
                                        accept_compression_encodings,
                                        send_compression_encodings,
                                    )
                                    .apply_max_message_size_config(
                                        max_decoding_message_size,
                                        max_encoding_message_size,
                                    );
                                let res = grpc.unary(method, req).await;
                                Ok(res)
                            };
                            Box::pin(fut)
                        }
                        "/switchback.v1.SwitchbackService/GetConfig" => {
                            #[allow(non_camel_case_types)]
                            struct GetConfigSvc<T: SwitchbackService>(pub Arc<T>);
                            impl<T: SwitchbackService>
                                tonic::server::UnaryService<super::GetConfigRequest>
                                for GetConfigSvc<T>
                            {
                                type Response = super::GetConfigResponse;
                                type Future =
                                    BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                                fn call(
                                    &mut self,
                                    request: tonic::Request<super::GetConfigRequest>,
                                ) -> Self::Future {
                                    let inner = Arc::clone(&self.0);
                                    let fut = async move {
                                        <T as SwitchbackService>::get_config(&inner, request).await
                                    };
                                    Box::pin(fut)
                                }
                            }
                            let accept_compression_encodings = self.accept_compression_encodings;
                            let send_compression_encodings = self.send_compression_encodings;
                            let max_decoding_message_size = self.max_decoding_message_size;
                            let max_encoding_message_size = self.max_encoding_message_size;
                            let inner = self.inner.clone();
                            let fut = async move {
                                let method = GetConfigSvc(inner);
                                let codec = tonic::codec::ProstCodec::default();
                                let mut grpc = tonic::server::Grpc::new(codec)
                                    .apply_compression_config(
                                        accept_compression_encodings,
                                        send_compression_encodings,
                                    )
                                    .apply_max_message_size_config(
                                        max_decoding_message_size,
                                        max_encoding_message_size,
                                    );
                                let res = grpc.unary(method, req).await;
                                Ok(res)
                            };
                            Box::pin(fut)
                        }
                        "/switchback.v1.SwitchbackService/UpdateRequestPatterns" => {
                            #[allow(non_camel_case_types)]
                            struct UpdateRequestPatternsSvc<T: SwitchbackService>(pub Arc<T>);
                            impl<T: SwitchbackService>
                                tonic::server::UnaryService<super::UpdatePatternsRequest>
                                for UpdateRequestPatternsSvc<T>
                            {
                                type Response = super::UpdatePatternsResponse;
                                type Future =
                                    BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                                fn call(
                                    &mut self,
                                    request: tonic::Request<super::UpdatePatternsRequest>,
                                ) -> Self::Future {
                                    let inner = Arc::clone(&self.0);
                                    let fut = async move {
                                        <T as SwitchbackService>::update_request_patterns(
                                            &inner, request,
                                        )
                                        .await
                                    };
                                    Box::pin(fut)
                                }
                            }
                            let accept_compression_encodings = self.accept_compression_encodings;
                            let send_compression_encodings = self.send_compression_encodings;
                            let max_decoding_message_size = self.max_decoding_message_size;
                            let max_encoding_message_size = self.max_encoding_message_size;
                            let inner = self.inner.clone();
                            let fut = async move {
                                let method = UpdateRequestPatternsSvc(inner);
                                let codec = tonic::codec::ProstCodec::default();
                                let mut grpc = tonic::server::Grpc::new(codec)
                                    .apply_compression_config(
                                        accept_compression_encodings,
                                        send_compression_encodings,
                                    )
                                    .apply_max_message_size_config(
                                        max_decoding_message_size,
                                        max_encoding_message_size,
                                    );
                                let res = grpc.unary(method, req).await;
                                Ok(res)
                            };
                            Box::pin(fut)
                        }
                        "/switchback.v1.SwitchbackService/UpdateCnamePatterns" => {
                            #[allow(non_camel_case_types)]
                            struct UpdateCnamePatternsSvc<T: SwitchbackService>(pub Arc<T>);
                            impl<T: SwitchbackService>
                                tonic::server::UnaryService<super::UpdatePatternsRequest>
                                for UpdateCnamePatternsSvc<T>
                            {
                                type Response = super::UpdatePatternsResponse;
                                type Future =
                                    BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                                fn call(
                                    &mut self,
                                    request: tonic::Request<super::UpdatePatternsRequest>,
                                ) -> Self::Future {
                                    let inner = Arc::clone(&self.0);
                                    let fut = async move {
                                        <T as SwitchbackService>::update_cname_patterns(
                                            &inner, request,
                                        )
                                        .await
                                    };
                                    Box::pin(fut)
                                }
                            }
                            let accept_compression_encodings = self.accept_compression_encodings;
                            let send_compression_encodings = self.send_compression_encodings;
                            let max_decoding_message_size = self.max_decoding_message_size;
                            let max_encoding_message_size = self.max_encoding_message_size;
                            let inner = self.inner.clone();
                            let fut = async move {
                                let method = UpdateCnamePatternsSvc(inner);
                                let codec = tonic::codec::ProstCodec::default();
                                let mut grpc = tonic::server::Grpc::new(codec)
                                    .apply_compression_config(
                                        accept_compression_encodings,
                                        send_compression_encodings,
                                    )
                                    .apply_max_message_size_config(
                                        max_decoding_message_size,
                                        max_encoding_message_size,
                                    );
                                let res = grpc.unary(method, req).await;
                                Ok(res)
                            };
                            Box::pin(fut)
                        }
                        "/switchback.v1.SwitchbackService/GetStats" => {
                            #[allow(non_camel_case_types)]
                            struct GetStatsSvc<T: SwitchbackService>(pub Arc<T>);
                            impl<T: SwitchbackService>
                                tonic::server::UnaryService<super::GetStatsRequest>
                                for GetStatsSvc<T>
                            {
                                type Response = super::GetStatsResponse;
                                type Future =
                                    BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                                fn call(
                                    &mut self,
                                    request: tonic::Request<super::GetStatsRequest>,
                                ) -> Self::Future {
                                    let inner = Arc::clone(&self.0);
                                    let fut = async move {
                                        <T as SwitchbackService>::get_stats(&inner, request).await
                                    };
                                    Box::pin(fut)
                                }
                            }
                            let accept_compression_encodings = self.accept_compression_encodings;
                            let send_compression_encodings = self.send_compression_encodings;
                            let max_decoding_message_size = self.max_decoding_message_size;
                            let max_encoding_message_size = self.max_encoding_message_size;
                            let inner = self.inner.clone();
                            let fut = async move {
                                let method = GetStatsSvc(inner);
                                let codec = tonic::codec::ProstCodec::default();
                                let mut grpc = tonic::server::Grpc::new(codec)
                                    .apply_compression_config(
                                        accept_compression_encodings,
                                        send_compression_encodings,
                                    )
                                    .apply_max_message_size_config(
                                        max_decoding_message_size,
                                        max_encoding_message_size,
                                    );
                                let res = grpc.unary(method, req).await;
                                Ok(res)
                            };
                            Box::pin(fut)
                        }
                        _ => Box::pin(async move {
                            Ok(http::Response::builder()
                                .status(200)
                                .header("grpc-status", tonic::Code::Unimplemented as i32)
                                .header(
                                    http::header::CONTENT_TYPE,
                                    tonic::metadata::GRPC_CONTENT_TYPE,
                                )
                                .body(empty_body())
                                .unwrap())
                        }),
                    }
                }
            }

            impl<T> Clone for SwitchbackServiceServer<T> {
                fn clone(&self) -> Self {
                    let inner = self.inner.clone();
                    Self {
                        inner,
                        accept_compression_encodings: self.accept_compression_encodings,
                        send_compression_encodings: self.send_compression_encodings,
                        max_decoding_message_size: self.max_decoding_message_size,
                        max_encoding_message_size: self.max_encoding_message_size,
                    }
                }
            }

            pub const SERVICE_NAME: &str = "switchback.v1.SwitchbackService";

            impl<T> tonic::server::NamedService for SwitchbackServiceServer<T> {
                const NAME: &'static str = SERVICE_NAME;
            }
        }
    }
}

/// `coredns.dns` — the DnsService the CoreDNS `grpc` plugin forwards to.
pub mod coredns {
    pub mod dns {
        /// A raw DNS message in RFC 1035 wire format.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct DnsPacket {
            #[prost(bytes = "vec", tag = "1")]
            pub msg: ::prost::alloc::vec::Vec<u8>,
        }

        /// Generated client implementations.
        pub mod dns_service_client {
            #![allow(unused_variables, dead_code, missing_docs, clippy::wildcard_imports)]
            use tonic::codegen::http::Uri;
            use tonic::codegen::*;

            #[derive(Debug, Clone)]
            pub struct DnsServiceClient<T> {
                inner: tonic::client::Grpc<T>,
            }

            impl DnsServiceClient<tonic::transport::Channel> {
                /// Attempt to create a new client by connecting to a given endpoint.
                pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
                where
                    D: TryInto<tonic::transport::Endpoint>,
                    D::Error: Into<StdError>,
                {
                    let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
                    Ok(Self::new(conn))
                }
            }

            impl<T> DnsServiceClient<T>
            where
                T: tonic::client::GrpcService<tonic::body::BoxBody>,
                T::Error: Into<StdError>,
                T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
                <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
            {
                pub fn new(inner: T) -> Self {
                    let inner = tonic::client::Grpc::new(inner);
                    Self { inner }
                }

                pub fn with_origin(inner: T, origin: Uri) -> Self {
                    let inner = tonic::client::Grpc::with_origin(inner, origin);
                    Self { inner }
                }

                /// Compress requests with the given encoding.
                #[must_use]
                pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
                    self.inner = self.inner.send_compressed(encoding);
                    self
                }

                /// Enable decompressing responses.
                #[must_use]
                pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
                    self.inner = self.inner.accept_compressed(encoding);
                    self
                }

                /// Limits the maximum size of a decoded message.
                #[must_use]
                pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
                    self.inner = self.inner.max_decoding_message_size(limit);
                    self
                }

                /// Limits the maximum size of an encoded message.
                #[must_use]
                pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
                    self.inner = self.inner.max_encoding_message_size(limit);
                    self
                }

                pub async fn query(
                    &mut self,
                    request: impl tonic::IntoRequest<super::DnsPacket>,
                ) -> std::result::Result<tonic::Response<super::DnsPacket>, tonic::Status>
                {
                    self.inner.ready().await.map_err(|e| {
                        tonic::Status::new(
                            tonic::Code::Unknown,
                            format!("Service was not ready: {}", e.into()),
                        )
                    })?;
                    let codec = tonic::codec::ProstCodec::default();
                    let path =
                        http::uri::PathAndQuery::from_static("/coredns.dns.DnsService/Query");
                    let mut req = request.into_request();
                    req.extensions_mut()
                        .insert(GrpcMethod::new("coredns.dns.DnsService", "Query"));
                    self.inner.unary(req, path, codec).await
                }
            }
        }

        /// Generated server implementations.
        pub mod dns_service_server {
            #![allow(unused_variables, dead_code, missing_docs, clippy::wildcard_imports)]
            use tonic::codegen::*;

            /// Generated trait containing gRPC methods that should be
            /// implemented for use with DnsServiceServer.
            #[async_trait]
            pub trait DnsService: std::marker::Send + std::marker::Sync + 'static {
                async fn query(
                    &self,
                    request: tonic::Request<super::DnsPacket>,
                ) -> std::result::Result<tonic::Response<super::DnsPacket>, tonic::Status>;
            }

            #[derive(Debug)]
            pub struct DnsServiceServer<T> {
                inner: Arc<T>,
                accept_compression_encodings: EnabledCompressionEncodings,
                send_compression_encodings: EnabledCompressionEncodings,
                max_decoding_message_size: Option<usize>,
                max_encoding_message_size: Option<usize>,
            }

            impl<T> DnsServiceServer<T> {
                pub fn new(inner: T) -> Self {
                    Self::from_arc(Arc::new(inner))
                }

                pub fn from_arc(inner: Arc<T>) -> Self {
                    Self {
                        inner,
                        accept_compression_encodings: Default::default(),
                        send_compression_encodings: Default::default(),
                        max_decoding_message_size: None,
                        max_encoding_message_size: None,
                    }
                }

                pub fn with_interceptor<F>(
                    inner: T,
                    interceptor: F,
                ) -> InterceptedService<Self, F>
                where
                    F: tonic::service::Interceptor,
                {
                    InterceptedService::new(Self::new(inner), interceptor)
                }

                /// Enable decompressing requests with the given encoding.
                #[must_use]
                pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
                    self.accept_compression_encodings.enable(encoding);
                    self
                }

                /// Compress responses with the given encoding, if the client supports it.
                #[must_use]
                pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
                    self.send_compression_encodings.enable(encoding);
                    self
                }

                /// Limits the maximum size of a decoded message.
                #[must_use]
                pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
                    self.max_decoding_message_size = Some(limit);
                    self
                }

                /// Limits the maximum size of an encoded message.
                #[must_use]
                pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
                    self.max_encoding_message_size = Some(limit);
                    self
                }
            }

            impl<T, B> tonic::codegen::Service<http::Request<B>> for DnsServiceServer<T>
            where
                T: DnsService,
                B: Body + std::marker::Send + 'static,
                B::Error: Into<StdError> + std::marker::Send + 'static,
            {
                type Response = http::Response<tonic::body::BoxBody>;
                type Error = std::convert::Infallible;
                type Future = BoxFuture<Self::Response, Self::Error>;

                fn poll_ready(
                    &mut self,
                    _cx: &mut Context<'_>,
                ) -> Poll<std::result::Result<(), Self::Error>> {
                    Poll::Ready(Ok(()))
                }

                fn call(&mut self, req: http::Request<B>) -> Self::Future {
                    match req.uri().path() {
                        "/coredns.dns.DnsService/Query" => {
                            #[allow(non_camel_case_types)]
                            struct QuerySvc<T: DnsService>(pub Arc<T>);
                            impl<T: DnsService> tonic::server::UnaryService<super::DnsPacket>
                                for QuerySvc<T>
                            {
                                type Response = super::DnsPacket;
                                type Future =
                                    BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                                fn call(
                                    &mut self,
                                    request: tonic::Request<super::DnsPacket>,
                                ) -> Self::Future {
                                    let inner = Arc::clone(&self.0);
                                    let fut = async move {
                                        <T as DnsService>::query(&inner, request).await
                                    };
                                    Box::pin(fut)
                                }
                            }
                            let accept_compression_encodings = self.accept_compression_encodings;
                            let send_compression_encodings = self.send_compression_encodings;
                            let max_decoding_message_size = self.max_decoding_message_size;
                            let max_encoding_message_size = self.max_encoding_message_size;
                            let inner = self.inner.clone();
                            let fut = async move {
                                let method = QuerySvc(inner);
                                let codec = tonic::codec::ProstCodec::default();
                                let mut grpc = tonic::server::Grpc::new(codec)
                                    .apply_compression_config(
                                        accept_compression_encodings,
                                        send_compression_encodings,
                                    )
                                    .apply_max_message_size_config(
                                        max_decoding_message_size,
                                        max_encoding_message_size,
                                    );
                                let res = grpc.unary(method, req).await;
                                Ok(res)
                            };
                            Box::pin(fut)
                        }
                        _ => Box::pin(async move {
                            Ok(http::Response::builder()
                                .status(200)
                                .header("grpc-status", tonic::Code::Unimplemented as i32)
                                .header(
                                    http::header::CONTENT_TYPE,
                                    tonic::metadata::GRPC_CONTENT_TYPE,
                                )
                                .body(empty_body())
                                .unwrap())
                        }),
                    }
                }
            }

            impl<T> Clone for DnsServiceServer<T> {
                fn clone(&self) -> Self {
                    let inner = self.inner.clone();
                    Self {
                        inner,
                        accept_compression_encodings: self.accept_compression_encodings,
                        send_compression_encodings: self.send_compression_encodings,
                        max_decoding_message_size: self.max_decoding_message_size,
                        max_encoding_message_size: self.max_encoding_message_size,
                    }
                }
            }

            pub const SERVICE_NAME: &str = "coredns.dns.DnsService";

            impl<T> tonic::server::NamedService for DnsServiceServer<T> {
                const NAME: &'static str = SERVICE_NAME;
            }
        }
    }
}
